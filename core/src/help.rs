//! Usage and help text rendering.
//!
//! The output is a pure function of the registry, the command name and the
//! [`HelpConfig`], so it can be compared against golden files:
//!
//! ```text
//! Usage: cp [<options>] src [dst]
//! -r, --recursive          Copy directories
//! src                      Source path
//! [dst]                    Destination path
//!                          (defaults to the current directory)
//! ```

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::descriptor::{HelpEntry, Kind};
use crate::registry::Registry;

/// Default width of the name column.
pub const DEFAULT_MIN_WIDTH: usize = 25;

/// Layout settings for help output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Minimum width of the name column. Longer names push the help text one
    /// space past the name.
    pub min_width: usize,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
        }
    }
}

/// Builds the `Usage:` line (without trailing newline).
///
/// Keywords are summarised as `[<options>]`; positionals are listed in
/// registration order, optional ones in brackets.
///
/// # Examples
///
/// ```
/// use argp_core::{usage_line, Flag, Positional, Registry};
///
/// let mut builder = Registry::builder();
/// builder.add(Flag::new(&["-f"], "Force"));
/// builder.add(Positional::<String>::required("src", "Source"));
/// builder.add(Positional::optional("dst", "Destination", String::new()));
/// let registry = builder.build();
///
/// assert_eq!(usage_line(&registry, "cp"), "Usage: cp [<options>] src [dst]");
/// ```
pub fn usage_line(registry: &Registry, cmd: &str) -> String {
    let mut parts = vec![format!("Usage: {cmd}")];
    if registry.iter().any(|d| d.kind() == Kind::Keyword) {
        parts.push("[<options>]".to_string());
    }
    parts.extend(
        registry
            .iter()
            .filter(|d| d.kind() == Kind::Positional)
            .map(|d| d.help_entry().name),
    );
    parts.join(" ")
}

/// Formats one help line, re-indenting continuation lines to the help
/// column.
fn format_entry(entry: &HelpEntry, min_width: usize) -> String {
    let name_width = entry.name.chars().count();
    let column = if name_width >= min_width {
        name_width + 1
    } else {
        min_width
    };
    let indent = " ".repeat(column);

    let mut help = entry.help.lines();
    let first = help.next().unwrap_or_default();
    let mut out = String::new();
    push_trimmed(&mut out, &format!("{:<column$}{first}", entry.name));
    for line in help {
        push_trimmed(&mut out, &format!("{indent}{line}"));
    }
    out
}

fn push_trimmed(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Renders the usage line and one line per descriptor.
///
/// # Examples
///
/// ```
/// use argp_core::{render_help, Flag, HelpConfig, Registry};
///
/// let mut builder = Registry::builder();
/// builder.add(Flag::new(&["-v", "--verbose"], "Talk more"));
/// let registry = builder.build();
///
/// let help = render_help(&registry, "tool", &HelpConfig { min_width: 16 });
/// assert_eq!(help, "Usage: tool [<options>]\n-v, --verbose   Talk more\n");
/// ```
pub fn render_help(registry: &Registry, cmd: &str, config: &HelpConfig) -> String {
    let mut out = usage_line(registry, cmd);
    out.push('\n');
    for entry in registry.help_entries() {
        out.push_str(&format_entry(&entry, config.min_width));
    }
    out
}

/// Writes [`render_help`] output to `out`.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_help<W: Write>(
    out: &mut W,
    registry: &Registry,
    cmd: &str,
    config: &HelpConfig,
) -> io::Result<()> {
    out.write_all(render_help(registry, cmd, config).as_bytes())?;
    out.flush()
}
