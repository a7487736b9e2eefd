use std::fmt;

/// Error that can occur during emission
#[derive(Debug, Clone, PartialEq)]
pub enum EmitError {
    /// Emitter not found in registry
    EmitterNotFound(String),
    /// Error during serialization
    Serialization(String),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::EmitterNotFound(name) => write!(f, "Emitter '{name}' not found"),
            EmitError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for EmitError {}
