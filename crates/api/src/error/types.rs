//! Error type definitions for cryptographic operations

use thiserror::Error;

/// Coarse classification of an [`Error`]
///
/// Callers that only need to branch on the failure class (for example,
/// "was the name simply absent?") match on this instead of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: bad encoding, size mismatch, unknown field name
    Invalid,
    /// Recognized but unsupported feature
    NotImplemented,
    /// The operation needs a parameter that was not supplied
    MoreInfo,
    /// A unit or algorithm could not be located
    NotFound,
    /// A unit could not report its implementations
    Enumeration,
    /// A unit was located but exports no plugin entry point
    Resolution,
    /// A unit failed to hand out a capability table
    Function,
    /// Anything else
    Other,
}

/// Primary error type for pcrypt operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Where the error occurred
        context: &'static str,
        /// What was wrong with the parameter
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Where the error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Not implemented error
    #[error("{feature} is not implemented")]
    NotImplemented {
        /// Name of the unsupported feature
        feature: &'static str,
    },

    /// A required initialization parameter is missing
    #[error("{context}: missing required parameter '{parameter}'")]
    MoreInfo {
        /// Operation that needed the parameter
        context: &'static str,
        /// Name of the missing parameter
        parameter: &'static str,
    },

    /// Lookup failure
    #[error("{context}: '{name}' not found")]
    NotFound {
        /// What kind of lookup failed
        context: &'static str,
        /// The name or key that was looked up
        name: String,
    },

    /// A unit could not enumerate its implementations
    #[error("unit '{unit}' could not be enumerated: {message}")]
    Enumeration {
        /// Unit being loaded
        unit: String,
        /// Stage that failed
        message: String,
    },

    /// A unit loaded but exports no entry point
    #[error("unit '{unit}' exports no plugin entry point")]
    Resolution {
        /// Unit being loaded
        unit: String,
    },

    /// A unit failed to hand out a capability table
    #[error("unit '{unit}' failed to provide a function table: {message}")]
    Function {
        /// Unit being loaded
        unit: String,
        /// Underlying failure
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        /// Where the error occurred
        context: &'static str,
        /// Description
        message: String,
    },
}

/// Result type for pcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `NotFound` error
    pub fn not_found(context: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            context,
            name: name.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } | Self::InvalidLength { .. } => ErrorKind::Invalid,
            Self::NotImplemented { .. } => ErrorKind::NotImplemented,
            Self::MoreInfo { .. } => ErrorKind::MoreInfo,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Enumeration { .. } => ErrorKind::Enumeration,
            Self::Resolution { .. } => ErrorKind::Resolution,
            Self::Function { .. } => ErrorKind::Function,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Replace the context of an existing error
    ///
    /// Variants that are keyed by unit name or feature keep their payload.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::MoreInfo { parameter, .. } => Self::MoreInfo { context, parameter },
            Self::NotFound { name, .. } => Self::NotFound { context, name },
            Self::Other { message, .. } => Self::Other { context, message },
            other => other,
        }
    }
}
