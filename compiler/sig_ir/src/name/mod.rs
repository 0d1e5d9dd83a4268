//! Qualified names.
//!
//! Three name families share one representation, distinguished by a marker
//! type so a module name can never be passed where an alias name is expected:
//!
//! - [`ModuleName`]: classes, modules, extensions targets, and constants
//! - [`InterfaceName`]: interfaces (conventionally `_Each`, `_ToS`, ...)
//! - [`AliasName`]: type aliases
//!
//! A qualified name is a [`Namespace`] plus a final segment. Absoluteness is
//! read off the namespace, so `::A::B::C` is the absolute namespace `[A, B]`
//! with final segment `C`, and `B::C` is relative.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::namespace::{parse_segments, SEPARATOR};
use crate::{NameParseError, Namespace, Symbol};

/// Marker for a family of qualified names.
pub trait NameKind: Copy + Eq + Ord + Hash + fmt::Debug {
    /// Label used in debug output, e.g. `ModuleName`.
    const LABEL: &'static str;
}

/// Marker for class, module and constant names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleKind {}

/// Marker for interface names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InterfaceKind {}

/// Marker for type alias names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AliasKind {}

impl NameKind for ModuleKind {
    const LABEL: &'static str = "ModuleName";
}

impl NameKind for InterfaceKind {
    const LABEL: &'static str = "InterfaceName";
}

impl NameKind for AliasKind {
    const LABEL: &'static str = "AliasName";
}

/// Name of a class, module, or constant.
pub type ModuleName = QualifiedName<ModuleKind>;

/// Name of an interface.
pub type InterfaceName = QualifiedName<InterfaceKind>;

/// Name of a type alias.
pub type AliasName = QualifiedName<AliasKind>;

/// A namespace plus a final segment.
///
/// Equality is structural: same anchor, same namespace segments, same final
/// segment. Resolved names (always absolute) are the registry keys.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName<K: NameKind> {
    namespace: Namespace,
    name: Symbol,
    kind: PhantomData<fn() -> K>,
}

impl<K: NameKind> QualifiedName<K> {
    /// Create a name from its namespace and final segment.
    pub fn new(namespace: Namespace, name: impl Into<Symbol>) -> Self {
        QualifiedName {
            namespace,
            name: name.into(),
            kind: PhantomData,
        }
    }

    /// Parse the textual form, e.g. `::A::B::C` or `C`.
    pub fn parse(input: &str) -> Result<Self, NameParseError> {
        let (absolute, rest) = match input.strip_prefix(SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let (namespace_part, name) = match rest.rsplit_once(SEPARATOR) {
            Some((namespace_part, name)) => (namespace_part, name),
            None => ("", rest),
        };
        if name.is_empty() {
            return Err(NameParseError::EmptyName {
                input: input.to_owned(),
            });
        }
        if name.contains(':') {
            return Err(NameParseError::EmptySegment {
                input: input.to_owned(),
            });
        }
        let segments = parse_segments(input, namespace_part)?;
        Ok(Self::new(Namespace::new(segments, absolute), name))
    }

    /// The namespace this name is qualified by.
    #[inline]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The final segment.
    #[inline]
    pub fn name(&self) -> &Symbol {
        &self.name
    }

    /// Check if this name is anchored at the root.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.namespace.is_absolute()
    }

    /// Check if this name is relative.
    #[inline]
    pub fn is_relative(&self) -> bool {
        self.namespace.is_relative()
    }

    /// Anchor this name at the root.
    #[must_use]
    pub fn to_absolute(&self) -> Self {
        Self::new(self.namespace.to_absolute(), self.name.clone())
    }

    /// Qualify a relative name by `namespace`. Absolute names are unchanged.
    #[must_use]
    pub fn in_namespace(&self, namespace: &Namespace) -> Self {
        if self.is_absolute() {
            return self.clone();
        }
        Self::new(namespace.concat(&self.namespace), self.name.clone())
    }
}

impl ModuleName {
    /// The namespace named by this module: the scope of its body.
    ///
    /// `::A::B` names the namespace `::A::B`.
    #[must_use]
    pub fn to_namespace(&self) -> Namespace {
        self.namespace.append(self.name.clone())
    }
}

impl InterfaceName {
    /// Check if the final segment carries the `_` interface marker.
    #[inline]
    pub fn is_conventional(&self) -> bool {
        self.name.starts_with('_')
    }
}

impl<K: NameKind> fmt::Display for QualifiedName<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_absolute() {
            f.write_str(SEPARATOR)?;
        }
        for segment in self.namespace.segments() {
            f.write_str(segment.as_str())?;
            f.write_str(SEPARATOR)?;
        }
        f.write_str(self.name.as_str())
    }
}

impl<K: NameKind> fmt::Debug for QualifiedName<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", K::LABEL)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
