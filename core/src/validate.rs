//! Registry validation.
//!
//! Catches descriptor setups that parse but cannot behave as intended: a
//! keyword nobody can type, an identifier shadowed by an earlier keyword, or
//! a required positional that an optional one will always fill first.
//!
//! # Examples
//!
//! ```
//! use argp_core::*;
//!
//! let mut builder = Registry::builder();
//! builder.add(Flag::new(&["-v", "--verbose"], ""));
//! builder.add(Keyword::new(&["-v"], "", 0u8));
//! let registry = builder.build();
//!
//! assert_eq!(
//!     validate_registry(&registry),
//!     vec![ValidationError::DuplicateIdentifier("-v".to_string())]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::descriptor::Kind;
use crate::registry::Registry;

/// Structural problems in a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A keyword descriptor declares no identifiers, so it can never match.
    #[error("keyword option at position {0} has no identifiers")]
    MissingIdentifiers(usize),
    /// An identifier or positional name is empty or whitespace-only.
    #[error("option at position {0} has an empty identifier")]
    EmptyIdentifier(usize),
    /// Two keyword descriptors claim the same identifier; the later one is
    /// unreachable through it.
    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(String),
    /// A required positional follows an optional one, which is always filled
    /// first.
    #[error("required positional {0} follows an optional positional")]
    RequiredAfterOptional(String),
}

/// Validates a registry, returning every problem found.
///
/// Parsing never calls this; [`RegistryBuilder::build`](crate::RegistryBuilder::build)
/// only logs its findings.
pub fn validate_registry(registry: &Registry) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut optional_seen = false;

    for (index, descriptor) in registry.iter().enumerate() {
        let identifiers = descriptor.identifiers();
        if identifiers.iter().any(|i| i.trim().is_empty()) {
            errors.push(ValidationError::EmptyIdentifier(index));
        }

        match descriptor.kind() {
            Kind::Keyword => {
                if identifiers.is_empty() {
                    errors.push(ValidationError::MissingIdentifiers(index));
                }
                for identifier in identifiers {
                    if !seen.insert(identifier.as_str()) {
                        errors.push(ValidationError::DuplicateIdentifier(identifier.clone()));
                    }
                }
            }
            Kind::Positional => {
                if !descriptor.is_required() {
                    optional_seen = true;
                } else if optional_seen {
                    let name = identifiers.first().cloned().unwrap_or_default();
                    errors.push(ValidationError::RequiredAfterOptional(name));
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flag, Positional, Variadic};

    #[test]
    fn test_validate_accepts_well_formed_registry() {
        let mut builder = Registry::builder();
        builder.add(Flag::new(&["-v", "--verbose"], ""));
        builder.add(Variadic::new(&["--"], ""));
        builder.add(Positional::<String>::required("src", ""));
        builder.add(Positional::optional("dst", "", String::new()));
        let registry = builder.build();

        assert!(validate_registry(&registry).is_empty());
    }

    #[test]
    fn test_validate_rejects_keyword_without_identifiers() {
        let mut builder = Registry::builder();
        builder.add(Flag::new(&[], ""));
        let registry = builder.build();

        assert_eq!(
            validate_registry(&registry),
            vec![ValidationError::MissingIdentifiers(0)]
        );
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let mut builder = Registry::builder();
        builder.add(Flag::new(&["-a", " "], ""));
        builder.add(Positional::<String>::required("", ""));
        let registry = builder.build();

        assert_eq!(
            validate_registry(&registry),
            vec![
                ValidationError::EmptyIdentifier(0),
                ValidationError::EmptyIdentifier(1),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_required_after_optional() {
        let mut builder = Registry::builder();
        builder.add(Positional::optional("mode", "", String::new()));
        builder.add(Positional::<String>::required("file", ""));
        let registry = builder.build();

        assert_eq!(
            validate_registry(&registry),
            vec![ValidationError::RequiredAfterOptional("file".to_string())]
        );
    }

    #[test]
    fn test_positional_names_do_not_clash_with_keywords() {
        let mut builder = Registry::builder();
        builder.add(Flag::new(&["file"], ""));
        builder.add(Positional::<String>::required("file", ""));
        let registry = builder.build();

        assert!(validate_registry(&registry).is_empty());
    }
}
