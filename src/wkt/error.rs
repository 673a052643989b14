use std::fmt;

/// Error returned when a well-known type conversion fails.
///
/// Both variants carry a human-readable message and propagate to the
/// immediate caller; nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WktError {
    /// Malformed wire input, never silently coerced.
    Format(String),
    /// The operation is intentionally not implemented for this type or
    /// input. A hard capability gap, not a transient failure.
    Unsupported(String),
}

impl WktError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    /// The message text, regardless of variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Format(message) | Self::Unsupported(message) => message,
        }
    }
}

impl fmt::Display for WktError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for WktError {}
