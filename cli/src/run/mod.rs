use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::DozeError;
use crate::manifest::{DozeToml, DEFAULT_GLOBAL};

mod engine;
mod errors;
mod ops;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Name of the global object carrying the native ops.
    pub global_name: String,
    /// Exposed to scripts as `<global>.argv`.
    pub argv: Vec<String>,
}

impl RunOptions {
    pub fn new(manifest: Option<&DozeToml>, argv: Vec<String>) -> Self {
        let global_name = manifest
            .map(|toml| toml.global_name())
            .unwrap_or(DEFAULT_GLOBAL)
            .to_string();
        Self { global_name, argv }
    }
}

/// Runs `script`, either a name from the manifest's `[run]` table (resolved
/// against the manifest's directory) or a path relative to the current
/// directory.
pub fn run(
    manifest: Option<&(PathBuf, DozeToml)>,
    script: &str,
    options: &RunOptions,
) -> Result<(), DozeError> {
    info!("Running script: {}", script);

    let path = match manifest {
        Some((dir, toml)) => match toml.script(script) {
            Some(script_path) => {
                info!("Found script '{}' mapping to: {}", script, script_path);
                dir.join(script_path)
            }
            None => {
                debug!("Script '{}' not in [run], treating as file path", script);
                PathBuf::from(script)
            }
        },
        None => PathBuf::from(script),
    };

    run_file(&path, options)
}

pub fn run_file(file_path: &Path, options: &RunOptions) -> Result<(), DozeError> {
    info!("Running file: {}", file_path.display());

    let absolute_path = if file_path.is_absolute() {
        file_path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| DozeError::CurrentDirectory { source: e })?
            .join(file_path)
    };

    if !absolute_path.exists() {
        warn!("File not found: {}", absolute_path.display());
        return Err(DozeError::FileNotFound {
            path: absolute_path.display().to_string(),
        });
    }
    if !absolute_path.is_file() {
        warn!("Path is not a file: {}", absolute_path.display());
        return Err(DozeError::NotAFile {
            path: absolute_path.display().to_string(),
        });
    }

    let source = std::fs::read_to_string(&absolute_path).map_err(|e| DozeError::ReadFile {
        path: absolute_path.display().to_string(),
        source: e,
    })?;
    debug!("Script size: {} characters", source.len());

    engine::execute(&source, options)?;
    info!("Script execution completed");
    Ok(())
}

/// Evaluates inline source and returns its completion value.
pub fn eval(source: &str, options: &RunOptions) -> Result<Option<String>, DozeError> {
    debug!("Evaluating {} characters of inline source", source.len());
    engine::execute(source, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_options_default_global() {
        let options = RunOptions::new(None, vec!["x".to_string()]);
        assert_eq!(options.global_name, "doze");
        assert_eq!(options.argv, vec!["x"]);

        let toml = DozeToml::from_str("[runtime]\nglobal = \"addon\"\n").unwrap();
        assert_eq!(RunOptions::new(Some(&toml), Vec::new()).global_name, "addon");
    }

    #[test]
    fn test_run_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let options = RunOptions::new(None, Vec::new());

        let err = run_file(&dir.path().join("missing.js"), &options).unwrap_err();
        assert!(matches!(err, DozeError::FileNotFound { .. }));

        let err = run_file(dir.path(), &options).unwrap_err();
        assert!(matches!(err, DozeError::NotAFile { .. }));
    }

    #[test]
    fn test_run_resolves_named_script() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("scripts")).unwrap();
        std::fs::write(
            dir.path().join("scripts").join("main.js"),
            "if (doze.length('') !== 0) throw new Error('bad length');",
        )
        .unwrap();
        let toml = DozeToml::from_str("[run]\ndefault = \"scripts/main.js\"\n").unwrap();
        let manifest = (dir.path().to_path_buf(), toml);
        let options = RunOptions::new(Some(&manifest.1), Vec::new());

        run(Some(&manifest), "default", &options).unwrap();
    }

    #[test]
    fn test_run_file_reports_script_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fail.js");
        std::fs::write(&path, "doze.delay(0, 'nope');").unwrap();

        let err = run_file(&path, &RunOptions::new(None, Vec::new())).unwrap_err();
        match err {
            DozeError::UncaughtException { message } => {
                assert!(message.contains("TypeError"));
                assert!(message.contains("delay: argument 2 must be a function"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
