//! The ordered, owning collection of option descriptors.
//!
//! A [`Registry`] is assembled once through [`RegistryBuilder`]; its
//! composition is frozen by [`RegistryBuilder::build`]. Every
//! [`add`](RegistryBuilder::add) returns a typed [`OptionId`] used to read
//! the descriptor back after parsing.
//!
//! # Examples
//!
//! ```
//! use argp_core::{Flag, Keyword, Positional, Registry};
//!
//! let mut builder = Registry::builder();
//! let verbose = builder.add(Flag::new(&["--verbose"], "Verbose output"));
//! let count = builder.add(Keyword::new(&["--count"], "Repetitions", 1u32));
//! let file = builder.add(Positional::<String>::required("file", "Input file"));
//! let mut registry = builder.build();
//!
//! let outcome = registry
//!     .parse(&["prog", "--verbose", "--count", "3", "input.txt"], 1)
//!     .unwrap();
//! assert!(outcome.all_recognised());
//! assert!(registry[verbose].value());
//! assert_eq!(*registry[count].value(), 3);
//! assert_eq!(registry[file].value(), "input.txt");
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use tracing::warn;

use crate::descriptor::{Descriptor, HelpEntry, Kind};
use crate::validate::validate_registry;

/// Typed handle to a descriptor inside a [`Registry`].
pub struct OptionId<D> {
    index: usize,
    _marker: PhantomData<fn() -> D>,
}

impl<D> OptionId<D> {
    /// Registration position of the descriptor.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<D> Clone for OptionId<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for OptionId<D> {}

impl<D> fmt::Debug for OptionId<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionId").field(&self.index).finish()
    }
}

/// Accumulates descriptors in registration order.
#[derive(Default)]
pub struct RegistryBuilder {
    descriptors: Vec<Box<dyn Descriptor>>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor, returning its handle.
    pub fn add<D: Descriptor>(&mut self, descriptor: D) -> OptionId<D> {
        let index = self.descriptors.len();
        self.descriptors.push(Box::new(descriptor));
        OptionId {
            index,
            _marker: PhantomData,
        }
    }

    /// Freezes the registry.
    ///
    /// Structural problems reported by
    /// [`validate_registry`](crate::validate_registry) are logged but do not
    /// prevent construction.
    pub fn build(self) -> Registry {
        let partition = Partition::of(&self.descriptors);
        let registry = Registry {
            descriptors: self.descriptors,
            partition,
        };
        for problem in validate_registry(&registry) {
            warn!(%problem, "option registry has a structural problem");
        }
        registry
    }
}

/// Indices of a registry split by [`Kind`], each in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Keyword descriptors.
    pub keyword: Vec<usize>,
    /// Positional descriptors.
    pub positional: Vec<usize>,
}

impl Partition {
    fn of(descriptors: &[Box<dyn Descriptor>]) -> Self {
        let mut partition = Partition::default();
        for (index, descriptor) in descriptors.iter().enumerate() {
            match descriptor.kind() {
                Kind::Keyword => partition.keyword.push(index),
                Kind::Positional => partition.positional.push(index),
            }
        }
        partition
    }
}

/// Owns the declared options of one command.
pub struct Registry {
    pub(crate) descriptors: Vec<Box<dyn Descriptor>>,
    partition: Partition,
}

impl Registry {
    /// Starts a new builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if no descriptor was registered.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Descriptor> + '_ {
        self.descriptors.iter().map(|d| &**d)
    }

    /// Returns the descriptor behind `id`.
    ///
    /// `None` when the handle belongs to another registry and points at a
    /// descriptor of a different type or past the end.
    pub fn get<D: Descriptor>(&self, id: OptionId<D>) -> Option<&D> {
        let descriptor: &dyn Descriptor = &**self.descriptors.get(id.index)?;
        let descriptor: &dyn Any = descriptor;
        descriptor.downcast_ref::<D>()
    }

    /// Descriptor indices split into keyword and positional subsets.
    ///
    /// Computed once when the registry is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp_core::{Flag, Positional, Registry};
    ///
    /// let mut builder = Registry::builder();
    /// builder.add(Positional::<String>::required("src", ""));
    /// builder.add(Flag::new(&["-f"], ""));
    /// builder.add(Positional::<String>::required("dst", ""));
    /// let registry = builder.build();
    /// let partition = registry.partition();
    ///
    /// assert_eq!(partition.keyword, vec![1]);
    /// assert_eq!(partition.positional, vec![0, 2]);
    /// ```
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Name/help pairs in registration order.
    pub fn help_entries(&self) -> Vec<HelpEntry> {
        self.descriptors.iter().map(|d| d.help_entry()).collect()
    }

    /// Names of required positionals that have not been set.
    ///
    /// Parsing never fails because of these; the caller decides whether a
    /// missing positional is fatal.
    pub fn missing_required(&self) -> Vec<&str> {
        self.descriptors
            .iter()
            .filter(|d| d.kind() == Kind::Positional && d.is_required() && !d.is_set())
            .filter_map(|d| d.identifiers().first().map(String::as_str))
            .collect()
    }

    pub(crate) fn descriptor_mut(&mut self, index: usize) -> &mut dyn Descriptor {
        &mut *self.descriptors[index]
    }
}

impl<D: Descriptor> Index<OptionId<D>> for Registry {
    type Output = D;

    /// # Panics
    ///
    /// Panics if `id` was issued by a different registry and does not refer
    /// to a `D` here.
    fn index(&self, id: OptionId<D>) -> &D {
        match self.get(id) {
            Some(descriptor) => descriptor,
            None => panic!("option handle {} does not belong to this registry", id.index),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.descriptors.iter().map(|d| d.help_entry().name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flag, Keyword, Positional};

    #[test]
    fn test_get_returns_typed_descriptor() {
        let mut builder = Registry::builder();
        let flag = builder.add(Flag::new(&["-q"], "quiet"));
        let level = builder.add(Keyword::new(&["-l"], "level", 2u8));
        let registry = builder.build();

        assert!(!registry.get(flag).unwrap().value());
        assert_eq!(*registry.get(level).unwrap().value(), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get_rejects_foreign_handle() {
        let mut other = Registry::builder();
        let foreign = other.add(Keyword::new(&["-n"], "", 0i32));
        let _ = other.build();

        let mut builder = Registry::builder();
        builder.add(Flag::new(&["-n"], ""));
        let registry = builder.build();

        assert!(registry.get(foreign).is_none());
    }

    #[test]
    fn test_partition_is_fixed_at_build() {
        let mut builder = Registry::builder();
        builder.add(Flag::new(&["-v"], ""));
        builder.add(Positional::<String>::required("file", ""));
        builder.add(Keyword::new(&["-n"], "", 0u32));
        let mut registry = builder.build();

        let before = registry.partition().clone();
        registry.parse(&["x", "-v"], 0).unwrap();
        assert_eq!(registry.partition(), &before);
        assert_eq!(before.keyword, vec![0, 2]);
        assert_eq!(before.positional, vec![1]);
    }

    #[test]
    fn test_missing_required_lists_unset_required_positionals() {
        let mut builder = Registry::builder();
        builder.add(Positional::<String>::required("src", ""));
        builder.add(Positional::optional("dst", "", String::new()));
        builder.add(Positional::<String>::required("mode", ""));
        let mut registry = builder.build();

        assert_eq!(registry.missing_required(), vec!["src", "mode"]);
        registry.parse(&["a"], 0).unwrap();
        assert_eq!(registry.missing_required(), vec!["mode"]);
    }

    #[test]
    fn test_help_entries_keep_registration_order() {
        let mut builder = Registry::builder();
        builder.add(Positional::<String>::required("file", "input"));
        builder.add(Flag::new(&["-v", "--verbose"], "verbose"));
        let registry = builder.build();

        let names: Vec<String> = registry.help_entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["file", "-v, --verbose"]);
    }
}
