#[derive(Debug, thiserror::Error)]
pub enum DelayError {
    #[error("{op}: invalid number of arguments (expected {expected}, got {actual})")]
    ArgumentCount { op: &'static str, expected: usize, actual: usize },

    #[error("{op}: argument {position} must be {expected}")]
    ArgumentType { op: &'static str, position: usize, expected: &'static str },

    /// Coercing an argument ran host code that raised. The host's exception
    /// is the error the caller sees.
    #[error("{op}: argument {position} could not be converted")]
    HostRaised { op: &'static str, position: usize },

    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead { path: String, #[source] source: std::io::Error },
}

impl DelayError {
    pub fn is_type_error(&self) -> bool {
        matches!(self, DelayError::ArgumentType { .. })
    }

    /// The host already holds an exception for this failure.
    pub fn is_host_raised(&self) -> bool {
        matches!(self, DelayError::HostRaised { .. })
    }
}

pub fn expect_arity(op: &'static str, expected: usize, actual: usize) -> Result<(), DelayError> {
    if actual != expected {
        return Err(DelayError::ArgumentCount { op, expected, actual });
    }
    Ok(())
}
