//! Error types for option parsing and configuration loading.
//!
//! [`ParseError`] covers the three ways a parse call can abort: a value that
//! does not convert, an option that runs out of tokens, and a descriptor that
//! declares an impossible parameter count. Unmatched tokens are not errors;
//! they are returned in [`ParseOutcome`](crate::ParseOutcome).

use thiserror::Error;

/// Errors that abort a parse call.
///
/// `Conversion` and `InsufficientArguments` are caused by user input and are
/// meant to be reported to the user. `InvalidArity` means a descriptor was
/// built wrong and indicates a programming error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token(s) handed to a descriptor could not be converted to its
    /// value type.
    #[error("invalid value {token:?} for {identifier}: {reason}")]
    Conversion {
        /// Identifier (or positional name) of the descriptor.
        identifier: String,
        /// The token that failed to convert.
        token: String,
        /// Reason reported by the converter.
        reason: String,
    },

    /// A matched option needs more tokens than remain in the input.
    #[error("{identifier} expects {expected} argument(s), {available} available")]
    InsufficientArguments {
        /// The token that matched the option.
        identifier: String,
        /// Tokens the option requires after the identifier.
        expected: usize,
        /// Tokens actually left after the identifier.
        available: usize,
    },

    /// A descriptor declared a parameter count below [`REST`](crate::REST).
    #[error("{identifier} declares invalid parameter count {count}")]
    InvalidArity {
        /// The token that matched the option.
        identifier: String,
        /// The offending count.
        count: isize,
    },
}

impl ParseError {
    /// Returns `true` for errors caused by malformed user input, as opposed
    /// to a misconfigured descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::ParseError;
    ///
    /// let err = ParseError::InvalidArity { identifier: "-x".into(), count: -4 };
    /// assert!(!err.is_input_error());
    /// ```
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ParseError::InvalidArity { .. })
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while loading or saving an [`ArgpConfig`](crate::ArgpConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`ConfigError`].
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
