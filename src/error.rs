use std::fmt;

/// Result type for activation operations
pub type Result<T> = std::result::Result<T, ActivationError>;

/// Main error type for the activation crate
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationError {
    /// Name not present in the dispatch table
    UnknownActivation {
        name: String,
    },

    /// Backward requested before any forward pass cached an activation
    NotComputed,

    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::UnknownActivation { name } => {
                write!(f, "Unknown activation '{}'", name)
            }
            ActivationError::NotComputed => write!(f, "Activation not yet computed"),
            ActivationError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            ActivationError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            ActivationError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ActivationError {}

impl From<serde_json::Error> for ActivationError {
    fn from(err: serde_json::Error) -> Self {
        ActivationError::SerializationError(err.to_string())
    }
}

impl From<bincode::Error> for ActivationError {
    fn from(err: bincode::Error) -> Self {
        ActivationError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl ActivationError {
    pub fn unknown_activation<S: Into<String>>(name: S) -> Self {
        ActivationError::UnknownActivation { name: name.into() }
    }

    pub fn dimension_mismatch<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        ActivationError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        ActivationError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Errors caused by how a layer was described rather than by the data flowing through it.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ActivationError::UnknownActivation { .. }
                | ActivationError::InvalidParameter { .. }
                | ActivationError::SerializationError(_)
        )
    }

    /// Errors caused by calling the forward/backward protocol out of order.
    pub fn is_logic_error(&self) -> bool {
        matches!(self, ActivationError::NotComputed)
    }
}
