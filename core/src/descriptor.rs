//! The option descriptor capability set.
//!
//! Every declared command-line option implements [`Descriptor`]. The parse
//! driver only talks to options through this trait: it asks how many tokens
//! an option consumes, whether a token selects it, and hands it the tokens to
//! convert. The built-in variants are [`Flag`](crate::Flag),
//! [`Keyword`](crate::Keyword), [`Variadic`](crate::Variadic) and
//! [`Positional`](crate::Positional); callers may implement the trait for
//! their own option types.

use std::any::Any;

use crate::error::{ParseError, Result};

/// Parameter count meaning "every remaining token".
pub const REST: isize = -1;

/// Which matching pass a descriptor takes part in.
///
/// All keyword descriptors are tried before any positional descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Matched by exact identifier equality.
    Keyword,
    /// Matched by declaration order.
    Positional,
}

/// The name column and help text of one option.
///
/// # Examples
///
/// ```
/// use argp_core::{Descriptor, Flag};
///
/// let flag = Flag::new(&["-v", "--verbose"], "Enable verbose output");
/// let entry = flag.help_entry();
/// assert_eq!(entry.name, "-v, --verbose");
/// assert_eq!(entry.help, "Enable verbose output");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Identifiers or positional name as shown in help output.
    pub name: String,
    /// Description, possibly spanning several lines.
    pub help: String,
}

/// A declared command-line option.
///
/// The `parse` contract: `args[0]` is the token that matched, followed by
/// exactly the number of tokens requested by [`param_count`], or by every
/// remaining token when the count is [`REST`]. Implementations must only
/// report [`is_set`] after a conversion that succeeded.
///
/// [`param_count`]: Descriptor::param_count
/// [`is_set`]: Descriptor::is_set
pub trait Descriptor: Any {
    /// Keyword or positional.
    fn kind(&self) -> Kind;

    /// Tokens consumed after the matched one, or [`REST`].
    fn param_count(&self) -> isize;

    /// Whether `token` selects this option.
    fn matches(&self, token: &str) -> bool;

    /// Converts the consumed tokens into this option's value.
    fn parse(&mut self, args: &[&str]) -> Result<()>;

    /// Whether a value has been parsed into this option.
    fn is_set(&self) -> bool;

    /// Identifiers this option answers to; a positional returns its name.
    fn identifiers(&self) -> &[String];

    /// Name column and description for help output.
    fn help_entry(&self) -> HelpEntry;

    /// Whether help output shows the option as mandatory.
    ///
    /// Never affects parse success.
    fn is_required(&self) -> bool {
        false
    }
}

/// A validated parameter count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many tokens after the matched one.
    Exact(usize),
    /// All tokens after the matched one.
    Rest,
}

impl Arity {
    /// Interprets a raw [`Descriptor::param_count`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidArity`] for counts below [`REST`].
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{Arity, REST};
    ///
    /// assert_eq!(Arity::from_count(2, "-p").unwrap(), Arity::Exact(2));
    /// assert_eq!(Arity::from_count(REST, "-p").unwrap(), Arity::Rest);
    /// assert!(Arity::from_count(-2, "-p").is_err());
    /// ```
    pub fn from_count(count: isize, identifier: &str) -> Result<Self> {
        match count {
            REST => Ok(Arity::Rest),
            n if n >= 0 => Ok(Arity::Exact(n as usize)),
            n => Err(ParseError::InvalidArity {
                identifier: identifier.to_string(),
                count: n,
            }),
        }
    }

    /// Number of tokens to take when `available` tokens follow the matched one.
    pub fn resolve(self, available: usize) -> usize {
        match self {
            Arity::Exact(n) => n,
            Arity::Rest => available,
        }
    }
}
