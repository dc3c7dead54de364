//! Declarative command-line option parsing.
//!
//! This crate declares options, matches an argument vector against them and
//! renders help text:
//!
//! - [`Descriptor`]: the capability set every option implements.
//! - [`Flag`], [`Keyword`], [`Variadic`], [`Positional`]: the built-in
//!   option variants.
//! - [`Registry`]: owns the options in declaration order and runs the parse.
//! - [`render_help`] / [`write_help`]: usage line plus one line per option.
//!
//! Parsing is a single forward pass. Each token is matched against keyword
//! options first, then against the first positional option not yet filled.
//! A match consumes the token plus the option's parameters; other tokens are
//! returned as unmatched. Conversion and arity failures abort the parse with
//! a [`ParseError`].
//!
//! # Example
//!
//! ```
//! use argp_core::*;
//!
//! let mut builder = Registry::builder();
//! let verbose = builder.add(Flag::new(&["--verbose"], "Verbose output"));
//! let count = builder.add(Keyword::new(&["--count"], "Repetitions", 0i64));
//! let file = builder.add(Positional::<String>::required("file", "Input file"));
//! let mut registry = builder.build();
//!
//! let outcome = registry
//!     .parse(&["prog", "--verbose", "--count", "3", "input.txt", "--unknown"], 1)
//!     .unwrap();
//!
//! assert!(registry[verbose].value());
//! assert_eq!(*registry[count].value(), 3);
//! assert_eq!(registry[file].value(), "input.txt");
//! assert_eq!(outcome.unmatched(), ["--unknown"]);
//!
//! let help = render_help(&registry, "prog", &HelpConfig::default());
//! assert!(help.starts_with("Usage: prog [<options>] file\n"));
//! ```

mod config;
pub mod convert;
mod cursor;
mod descriptor;
mod error;
mod help;
mod matcher;
mod options;
mod parser;
mod registry;
mod validate;

pub use config::ArgpConfig;
pub use descriptor::{Arity, Descriptor, HelpEntry, Kind, REST};
pub use error::{ConfigError, ConfigResult, ParseError, Result};
pub use help::{DEFAULT_MIN_WIDTH, HelpConfig, render_help, usage_line, write_help};
pub use matcher::match_token;
pub use options::{Flag, Keyword, Positional, Variadic};
pub use parser::{DEFAULT_SKIP, ParseConfig, ParseOutcome};
pub use registry::{OptionId, Partition, Registry, RegistryBuilder};
pub use validate::{ValidationError, validate_registry};
