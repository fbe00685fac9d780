use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::DozeError;

pub const MANIFEST_NAME: &str = "doze.toml";
pub const DEFAULT_GLOBAL: &str = "doze";

#[derive(Debug, Default, Deserialize)]
pub struct DozeToml {
    pub runtime: Option<RuntimeConfig>,
    pub run: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Name of the global object the native ops are installed on.
    pub global: Option<String>,
    pub log_level: Option<String>,
}

impl DozeToml {
    pub fn from_str(contents: &str) -> Result<Self, DozeError> {
        let toml: Self =
            toml::from_str(contents).map_err(|e| DozeError::ManifestParse { source: e })?;
        toml.validate()?;
        Ok(toml)
    }

    /// Walks up from `start_dir` to the first directory holding a doze.toml.
    pub fn load_nearest(start_dir: PathBuf) -> Result<(PathBuf, Self), DozeError> {
        let mut current_dir = start_dir.clone();
        loop {
            let file_path = current_dir.join(MANIFEST_NAME);
            if file_path.is_file() {
                let contents =
                    std::fs::read_to_string(&file_path).map_err(|e| DozeError::ReadFile {
                        path: file_path.display().to_string(),
                        source: e,
                    })?;
                return Ok((current_dir, Self::from_str(&contents)?));
            }
            if !current_dir.pop() {
                return Err(DozeError::ManifestNotFound {
                    start_dir: start_dir.display().to_string(),
                });
            }
        }
    }

    pub fn global_name(&self) -> &str {
        self.runtime
            .as_ref()
            .and_then(|runtime| runtime.global.as_deref())
            .unwrap_or(DEFAULT_GLOBAL)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.runtime
            .as_ref()
            .and_then(|runtime| runtime.log_level.as_deref())
    }

    /// The path registered under `script` in `[run]`, if any.
    pub fn script(&self, script: &str) -> Option<&str> {
        self.run
            .as_ref()
            .and_then(|run| run.get(script))
            .map(String::as_str)
    }

    fn validate(&self) -> Result<(), DozeError> {
        let global = self.global_name();
        if !is_identifier(global) {
            return Err(DozeError::InvalidGlobalName {
                name: global.to_string(),
            });
        }
        if let Some(level) = self.log_level() {
            if crate::logger::level_from_str(level).is_none() {
                return Err(DozeError::InvalidLogLevel {
                    level: level.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
