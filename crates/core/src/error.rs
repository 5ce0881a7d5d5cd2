//! Error types shared by every toolkit module

use thiserror::Error;

pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Failures raised when text or ordinals do not name a member of a closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    /// Unparseable or unsupported discrete value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value outside an enumeration's closed set reached a dispatcher
    #[error("Unexpected {type_name} {variant}")]
    UnexpectedVariant {
        type_name: &'static str,
        variant: String,
    },
}

impl ToolkitError {
    /// Error for text that names no variant of `type_name`.
    pub fn no_match(type_name: &str, text: &str) -> Self {
        Self::InvalidArgument(format!("No {type_name} matches \"{text}\""))
    }
}
