#[derive(Debug, thiserror::Error)]
pub enum DozeError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Path is not a file: {path}")]
    NotAFile { path: String },

    #[error("Failed to get current directory: {source}")]
    CurrentDirectory { #[source] source: std::io::Error },

    #[error("Failed to read '{path}': {source}")]
    ReadFile { path: String, #[source] source: std::io::Error },

    #[error("Failed to parse doze.toml: {source}")]
    ManifestParse { #[source] source: toml::de::Error },

    #[error("No doze.toml found starting from directory '{start_dir}'")]
    ManifestNotFound { start_dir: String },

    #[error("Invalid global name '{name}': expected a JavaScript identifier")]
    InvalidGlobalName { name: String },

    #[error("Invalid log level '{level}'")]
    InvalidLogLevel { level: String },

    #[error("V8 string creation failed")]
    V8StringCreation,

    #[error("Failed to create native function '{name}'")]
    V8FunctionCreation { name: String },

    #[error("Failed to compile script: {message}")]
    ScriptCompilation { message: String },

    #[error("Uncaught exception: {message}")]
    UncaughtException { message: String },
}
