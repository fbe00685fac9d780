use std::path::Path;

use log::debug;

use crate::errors::DelayError;

pub const LIST_BY_EXTENSION_ARITY: usize = 3;

/// The text after the last `.` of `name`, or `""` when there is none.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i + 1..],
        None => "",
    }
}

/// Names of the entries in `dir` whose extension is exactly `extension`,
/// sorted by name.
pub fn list_by_extension(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<String>, DelayError> {
    let dir = dir.as_ref();
    let read_error = |source: std::io::Error| DelayError::DirectoryRead {
        path: dir.display().to_string(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if extension_of(&name) == extension {
            names.push(name);
        }
    }
    names.sort();

    debug!(
        "Found {} entries with extension '{}' in {}",
        names.len(),
        extension,
        dir.display()
    );
    Ok(names)
}
