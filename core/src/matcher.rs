//! Token-to-descriptor matching.
//!
//! A positional descriptor accepts any token until it has been filled, so
//! every keyword identifier must be tried first; otherwise each flag would be
//! swallowed as a positional value.

use crate::registry::Registry;

/// Finds the index of the descriptor `token` selects.
///
/// Keyword descriptors are tried in registration order, then positional
/// descriptors in registration order. Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use argp_core::{match_token, Flag, Positional, Registry};
///
/// let mut builder = Registry::builder();
/// builder.add(Positional::<String>::required("file", ""));
/// builder.add(Flag::new(&["-x"], ""));
/// let registry = builder.build();
///
/// assert_eq!(match_token(&registry, "-x"), Some(1));
/// assert_eq!(match_token(&registry, "notes.txt"), Some(0));
/// ```
pub fn match_token(registry: &Registry, token: &str) -> Option<usize> {
    let partition = registry.partition();
    partition
        .keyword
        .iter()
        .chain(partition.positional.iter())
        .copied()
        .find(|&index| registry.descriptors[index].matches(token))
}
