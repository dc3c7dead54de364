//! Built-in option variants.
//!
//! - [`Flag`]: keyword, no parameters, presence sets `true`.
//! - [`Keyword`]: keyword with one converted parameter.
//! - [`Variadic`]: keyword capturing every remaining token verbatim.
//! - [`Positional`]: filled by declaration order from one token.
//!
//! # Examples
//!
//! ```
//! use argp_core::{Descriptor, Keyword, Positional};
//!
//! let mut count = Keyword::new(&["-c", "--count"], "Number of runs", 1u32);
//! count.parse(&["--count", "3"]).unwrap();
//! assert_eq!(*count.value(), 3);
//!
//! let mut file = Positional::<String>::required("file", "Input file");
//! assert!(file.matches("input.txt"));
//! file.parse(&["input.txt"]).unwrap();
//! assert!(!file.matches("other.txt"));
//! ```

use std::any::{Any, TypeId};
use std::fmt::Display;
use std::str::FromStr;

use crate::convert::{self, Converter};
use crate::descriptor::{Descriptor, HelpEntry, Kind, REST};
use crate::error::{ParseError, Result};

fn owned_identifiers(identifiers: &[&str]) -> Vec<String> {
    identifiers.iter().map(|s| s.to_string()).collect()
}

fn keyword_help(identifiers: &[String], help: &str) -> HelpEntry {
    HelpEntry {
        name: identifiers.join(", "),
        help: help.to_string(),
    }
}

fn missing_parameter(args: &[&str], expected: usize) -> ParseError {
    ParseError::InsufficientArguments {
        identifier: args.first().copied().unwrap_or_default().to_string(),
        expected,
        available: args.len().saturating_sub(1),
    }
}

// ---------------------------------------------------------------------------
// Flag
// ---------------------------------------------------------------------------

/// A boolean switch: `false` until one of its identifiers appears.
///
/// Repeating the flag is harmless; every occurrence sets `true`.
#[derive(Debug, Clone)]
pub struct Flag {
    identifiers: Vec<String>,
    help: String,
    value: bool,
    is_set: bool,
}

impl Flag {
    /// Creates a flag answering to any of `identifiers`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{Descriptor, Flag};
    ///
    /// let mut verbose = Flag::new(&["-v", "--verbose"], "Enable verbose output");
    /// assert!(!verbose.value());
    /// verbose.parse(&["-v"]).unwrap();
    /// assert!(verbose.value());
    /// ```
    pub fn new(identifiers: &[&str], help: &str) -> Self {
        Self::with_default(identifiers, help, false)
    }

    /// Creates a flag whose value before any occurrence is `default`.
    ///
    /// Presence still sets `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{Descriptor, Flag};
    ///
    /// let color = Flag::with_default(&["--color"], "Colorize output", true);
    /// assert!(color.value());
    /// assert!(!color.is_set());
    /// ```
    pub fn with_default(identifiers: &[&str], help: &str, default: bool) -> Self {
        Self {
            identifiers: owned_identifiers(identifiers),
            help: help.to_string(),
            value: default,
            is_set: false,
        }
    }

    /// Current value.
    pub fn value(&self) -> bool {
        self.value
    }
}

impl Descriptor for Flag {
    fn kind(&self) -> Kind {
        Kind::Keyword
    }

    fn param_count(&self) -> isize {
        0
    }

    fn matches(&self, token: &str) -> bool {
        self.identifiers.iter().any(|i| i == token)
    }

    fn parse(&mut self, _args: &[&str]) -> Result<()> {
        self.value = true;
        self.is_set = true;
        Ok(())
    }

    fn is_set(&self) -> bool {
        self.is_set
    }

    fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    fn help_entry(&self) -> HelpEntry {
        keyword_help(&self.identifiers, &self.help)
    }
}

// ---------------------------------------------------------------------------
// Keyword
// ---------------------------------------------------------------------------

/// A keyword option taking exactly one parameter.
///
/// `String` targets keep the token verbatim; other types go through their
/// converter, [`convert::from_str`] unless another one is supplied.
///
/// `Keyword<bool>` behaves like [`Flag`]: it takes no parameter and its
/// presence sets `true`.
#[derive(Debug, Clone)]
pub struct Keyword<T> {
    identifiers: Vec<String>,
    help: String,
    value: T,
    is_set: bool,
    convert: Converter<T>,
}

impl<T> Keyword<T>
where
    T: FromStr + 'static,
    T::Err: Display,
{
    /// Creates a keyword option converting its parameter with [`FromStr`].
    pub fn new(identifiers: &[&str], help: &str, default: T) -> Self {
        Self::with_converter(identifiers, help, default, convert::from_str::<T>)
    }
}

impl<T: 'static> Keyword<T> {
    /// Creates a keyword option with a custom converter.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{convert, Descriptor, Keyword};
    ///
    /// let mut mask = Keyword::with_converter(&["--mask"], "Bit mask", 0, convert::radix_u64);
    /// mask.parse(&["--mask", "0xff"]).unwrap();
    /// assert_eq!(*mask.value(), 255);
    /// ```
    pub fn with_converter(
        identifiers: &[&str],
        help: &str,
        default: T,
        convert: Converter<T>,
    ) -> Self {
        Self {
            identifiers: owned_identifiers(identifiers),
            help: help.to_string(),
            value: default,
            is_set: false,
            convert,
        }
    }

    /// Current value; the default until a successful parse.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the option, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    fn is_switch() -> bool {
        TypeId::of::<T>() == TypeId::of::<bool>()
    }
}

impl<T: 'static> Descriptor for Keyword<T> {
    fn kind(&self) -> Kind {
        Kind::Keyword
    }

    fn param_count(&self) -> isize {
        if Self::is_switch() { 0 } else { 1 }
    }

    fn matches(&self, token: &str) -> bool {
        self.identifiers.iter().any(|i| i == token)
    }

    fn parse(&mut self, args: &[&str]) -> Result<()> {
        let value: &mut dyn Any = &mut self.value;
        if let Some(switch) = value.downcast_mut::<bool>() {
            *switch = true;
            self.is_set = true;
            return Ok(());
        }
        let (identifier, token) = match args {
            [identifier, token, ..] => (*identifier, *token),
            _ => return Err(missing_parameter(args, 1)),
        };
        self.value = (self.convert)(token).map_err(|reason| ParseError::Conversion {
            identifier: identifier.to_string(),
            token: token.to_string(),
            reason,
        })?;
        self.is_set = true;
        Ok(())
    }

    fn is_set(&self) -> bool {
        self.is_set
    }

    fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    fn help_entry(&self) -> HelpEntry {
        keyword_help(&self.identifiers, &self.help)
    }
}

// ---------------------------------------------------------------------------
// Variadic
// ---------------------------------------------------------------------------

/// A keyword option that swallows every token after it.
///
/// Reaching the identifier as the last token is not an error; the capture is
/// simply empty.
#[derive(Debug, Clone)]
pub struct Variadic {
    identifiers: Vec<String>,
    help: String,
    values: Vec<String>,
    is_set: bool,
}

impl Variadic {
    /// Creates a capture-the-rest option with an empty default.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{Descriptor, Variadic};
    ///
    /// let mut rest = Variadic::new(&["--"], "Arguments for the child process");
    /// rest.parse(&["--", "ls", "-l"]).unwrap();
    /// assert_eq!(rest.values(), ["ls", "-l"]);
    /// ```
    pub fn new(identifiers: &[&str], help: &str) -> Self {
        Self {
            identifiers: owned_identifiers(identifiers),
            help: help.to_string(),
            values: Vec::new(),
            is_set: false,
        }
    }

    /// Captured tokens, in input order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Consumes the option, returning the captured tokens.
    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

impl Descriptor for Variadic {
    fn kind(&self) -> Kind {
        Kind::Keyword
    }

    fn param_count(&self) -> isize {
        REST
    }

    fn matches(&self, token: &str) -> bool {
        self.identifiers.iter().any(|i| i == token)
    }

    fn parse(&mut self, args: &[&str]) -> Result<()> {
        self.values = args.iter().skip(1).map(|s| s.to_string()).collect();
        self.is_set = true;
        Ok(())
    }

    fn is_set(&self) -> bool {
        self.is_set
    }

    fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    fn help_entry(&self) -> HelpEntry {
        keyword_help(&self.identifiers, &self.help)
    }
}

// ---------------------------------------------------------------------------
// Positional
// ---------------------------------------------------------------------------

/// An option filled by position: it claims the first token no keyword
/// claims, once.
#[derive(Debug, Clone)]
pub struct Positional<T> {
    name: String,
    help: String,
    is_required: bool,
    value: T,
    is_set: bool,
    convert: Converter<T>,
}

impl<T> Positional<T>
where
    T: FromStr + 'static,
    T::Err: Display,
{
    /// Creates a positional option converting its token with [`FromStr`].
    pub fn new(name: &str, help: &str, is_required: bool, default: T) -> Self {
        Self::with_converter(name, help, is_required, default, convert::from_str::<T>)
    }

    /// Creates a positional shown as mandatory in help, defaulting to
    /// `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{Descriptor, Positional};
    ///
    /// let file = Positional::<String>::required("file", "Input file");
    /// assert!(file.is_required());
    /// assert_eq!(file.help_entry().name, "file");
    /// ```
    pub fn required(name: &str, help: &str) -> Self
    where
        T: Default,
    {
        Self::new(name, help, true, T::default())
    }

    /// Creates a positional shown as optional in help.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{Descriptor, Positional};
    ///
    /// let jobs = Positional::optional("jobs", "Worker count", 4u16);
    /// assert_eq!(jobs.help_entry().name, "[jobs]");
    /// assert_eq!(*jobs.value(), 4);
    /// ```
    pub fn optional(name: &str, help: &str, default: T) -> Self {
        Self::new(name, help, false, default)
    }
}

impl<T: 'static> Positional<T> {
    /// Creates a positional option with a custom converter.
    pub fn with_converter(
        name: &str,
        help: &str,
        is_required: bool,
        default: T,
        convert: Converter<T>,
    ) -> Self {
        Self {
            name: name.to_string(),
            help: help.to_string(),
            is_required,
            value: default,
            is_set: false,
            convert,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value; the default until a successful parse.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the option, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: 'static> Descriptor for Positional<T> {
    fn kind(&self) -> Kind {
        Kind::Positional
    }

    fn param_count(&self) -> isize {
        0
    }

    fn matches(&self, _token: &str) -> bool {
        !self.is_set
    }

    fn parse(&mut self, args: &[&str]) -> Result<()> {
        let Some(token) = args.first() else {
            return Err(ParseError::InsufficientArguments {
                identifier: self.name.clone(),
                expected: 1,
                available: 0,
            });
        };
        let value = (self.convert)(token).map_err(|reason| ParseError::Conversion {
            identifier: self.name.clone(),
            token: token.to_string(),
            reason,
        })?;
        self.value = value;
        self.is_set = true;
        Ok(())
    }

    fn is_set(&self) -> bool {
        self.is_set
    }

    fn identifiers(&self) -> &[String] {
        std::slice::from_ref(&self.name)
    }

    fn help_entry(&self) -> HelpEntry {
        let name = if self.is_required {
            self.name.clone()
        } else {
            format!("[{}]", self.name)
        };
        HelpEntry {
            name,
            help: self.help.clone(),
        }
    }

    fn is_required(&self) -> bool {
        self.is_required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_matches_any_identifier_exactly() {
        let flag = Flag::new(&["-v", "--verbose"], "");

        assert!(flag.matches("-v"));
        assert!(flag.matches("--verbose"));
        assert!(!flag.matches("--Verbose"));
        assert!(!flag.matches("--verbos"));
        assert!(!flag.matches("-vv"));
    }

    #[test]
    fn test_flag_repeat_is_idempotent() {
        let mut flag = Flag::new(&["-v"], "");
        flag.parse(&["-v"]).unwrap();
        flag.parse(&["-v"]).unwrap();

        assert!(flag.value());
        assert!(flag.is_set());
    }

    #[test]
    fn test_flag_with_default_reports_default_until_seen() {
        let mut color = Flag::with_default(&["--color"], "", true);
        assert!(color.value());
        assert!(!color.is_set());

        color.parse(&["--color"]).unwrap();
        assert!(color.value());
        assert!(color.is_set());
    }

    #[test]
    fn test_bool_keyword_takes_no_parameter() {
        let mut verbose = Keyword::new(&["-v"], "", false);
        assert_eq!(verbose.param_count(), 0);

        verbose.parse(&["-v"]).unwrap();
        assert!(*verbose.value());
        assert!(verbose.is_set());
    }

    #[test]
    fn test_keyword_string_is_verbatim() {
        let mut name = Keyword::new(&["--name"], "", String::new());
        name.parse(&["--name", "  spaced \"quoted\" "]).unwrap();

        assert_eq!(name.value(), "  spaced \"quoted\" ");
    }

    #[test]
    fn test_keyword_failed_conversion_keeps_default_and_unset() {
        let mut count = Keyword::new(&["--count"], "", 7i32);
        let err = count.parse(&["--count", "12abc"]).unwrap_err();

        assert!(matches!(
            err,
            ParseError::Conversion { ref identifier, ref token, .. }
                if identifier == "--count" && token == "12abc"
        ));
        assert_eq!(*count.value(), 7);
        assert!(!count.is_set());
    }

    #[test]
    fn test_keyword_without_parameter_reports_insufficient() {
        let mut count = Keyword::new(&["--count"], "", 0u8);
        let err = count.parse(&["--count"]).unwrap_err();

        assert_eq!(
            err,
            ParseError::InsufficientArguments {
                identifier: "--count".to_string(),
                expected: 1,
                available: 0,
            }
        );
    }

    #[test]
    fn test_variadic_allows_empty_capture() {
        let mut rest = Variadic::new(&["--rest"], "");
        rest.parse(&["--rest"]).unwrap();

        assert!(rest.values().is_empty());
        assert!(rest.is_set());
        assert_eq!(rest.param_count(), REST);
    }

    #[test]
    fn test_positional_matches_only_until_set() {
        let mut pos = Positional::<u16>::required("port", "");
        assert!(pos.matches("--anything"));

        pos.parse(&["8080"]).unwrap();
        assert_eq!(*pos.value(), 8080);
        assert!(!pos.matches("9090"));
    }

    #[test]
    fn test_positional_conversion_error_names_the_positional() {
        let mut pos = Positional::<u16>::required("port", "");
        let err = pos.parse(&["eighty"]).unwrap_err();

        assert!(matches!(
            err,
            ParseError::Conversion { ref identifier, .. } if identifier == "port"
        ));
        assert!(pos.matches("80"));
    }

    #[test]
    fn test_help_entries() {
        let kw = Keyword::new(&["-o", "--output"], "Output path", String::new());
        let opt = Positional::optional("extra", "Extra input", String::new());

        assert_eq!(kw.help_entry().name, "-o, --output");
        assert_eq!(opt.help_entry().name, "[extra]");
        assert!(!opt.is_required());
    }
}
