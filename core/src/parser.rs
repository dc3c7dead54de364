//! The parse driver: one left-to-right pass over the input.
//!
//! Each candidate token is matched against the registry. A match consumes the
//! token and its parameters through the [`Cursor`] and hands them to the
//! descriptor; anything else is recorded as unmatched. The first conversion or
//! arity failure aborts the pass. Descriptors parsed before the failure keep
//! their new values.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::Result;
use crate::matcher::match_token;
use crate::registry::Registry;

/// Default number of leading tokens skipped (the program name).
pub const DEFAULT_SKIP: usize = 1;

/// Settings for a parse call.
///
/// # Examples
///
/// ```
/// use argp_core::ParseConfig;
///
/// assert_eq!(ParseConfig::default().skip_first_n, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Leading tokens to ignore before matching starts.
    pub skip_first_n: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            skip_first_n: DEFAULT_SKIP,
        }
    }
}

/// Tokens no descriptor claimed, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    unmatched: Vec<String>,
}

impl ParseOutcome {
    /// Unmatched tokens.
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Consumes the outcome, returning the unmatched tokens.
    pub fn into_unmatched(self) -> Vec<String> {
        self.unmatched
    }

    /// Returns `true` if every token was claimed by some descriptor.
    pub fn all_recognised(&self) -> bool {
        self.unmatched.is_empty()
    }
}

impl Registry {
    /// Parses `tokens`, ignoring the first `skip_first_n`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Conversion`](crate::ParseError::Conversion) if a value
    ///   does not convert.
    /// - [`ParseError::InsufficientArguments`](crate::ParseError::InsufficientArguments)
    ///   if an option runs out of tokens.
    /// - [`ParseError::InvalidArity`](crate::ParseError::InvalidArity) if a
    ///   descriptor declares a parameter count below [`REST`](crate::REST).
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{Flag, Registry};
    ///
    /// let mut builder = Registry::builder();
    /// let all = builder.add(Flag::new(&["-a"], "Show all"));
    /// let mut registry = builder.build();
    ///
    /// let outcome = registry.parse(&["ls", "-l", "-a", "-h"], 1).unwrap();
    /// assert_eq!(outcome.unmatched(), ["-l", "-h"]);
    /// assert!(!outcome.all_recognised());
    /// assert!(registry[all].value());
    /// ```
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S], skip_first_n: usize) -> Result<ParseOutcome> {
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let mut cursor = Cursor::new(&tokens, skip_first_n);
        let mut unmatched = Vec::new();

        while let Some(token) = cursor.peek() {
            let Some(index) = match_token(self, token) else {
                trace!(token, "no option matched");
                unmatched.push(token.to_string());
                cursor.skip();
                continue;
            };
            let descriptor = self.descriptor_mut(index);
            let args = cursor.consume(descriptor.param_count())?;
            debug!(
                token,
                option = index,
                parameters = args.len() - 1,
                "matched option"
            );
            descriptor.parse(args)?;
        }

        Ok(ParseOutcome { unmatched })
    }

    /// Parses `tokens` with the skip count from `config`.
    pub fn parse_with<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        config: &ParseConfig,
    ) -> Result<ParseOutcome> {
        self.parse(tokens, config.skip_first_n)
    }

    /// Parses the process arguments, skipping the program name.
    pub fn parse_env(&mut self) -> Result<ParseOutcome> {
        let args: Vec<String> = std::env::args().collect();
        self.parse(&args, DEFAULT_SKIP)
    }
}
