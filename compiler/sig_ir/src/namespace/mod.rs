//! Lexical namespaces.
//!
//! A `Namespace` is the path of scope segments a declaration or a reference
//! lives in, e.g. the body of `class A::B` is the namespace `::A::B`.
//! Namespaces are immutable values: every operation returns a new namespace.
//!
//! # Textual Form
//!
//! ```text
//! ::          root (absolute, no segments)
//! ::A::B      absolute [A, B]
//! A::B        relative [A, B]
//!             empty (relative, no segments)
//! ```

use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::{NameParseError, Symbol};

/// Separator between namespace segments.
pub const SEPARATOR: &str = "::";

/// Ordered path of scope segments, anchored at the root or relative.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace {
    segments: SmallVec<[Symbol; 4]>,
    absolute: bool,
}

impl Namespace {
    /// The root namespace: absolute with no segments.
    pub fn root() -> Self {
        Namespace {
            segments: SmallVec::new(),
            absolute: true,
        }
    }

    /// The empty relative namespace.
    pub fn empty() -> Self {
        Namespace {
            segments: SmallVec::new(),
            absolute: false,
        }
    }

    /// Create a namespace from segments.
    pub fn new(segments: impl IntoIterator<Item = Symbol>, absolute: bool) -> Self {
        Namespace {
            segments: segments.into_iter().collect(),
            absolute,
        }
    }

    /// Parse the textual form (`::A::B`, `A::B`, `::`, or the empty string).
    ///
    /// A single trailing separator is accepted (`::A::B::`).
    pub fn parse(input: &str) -> Result<Self, NameParseError> {
        let (absolute, rest) = match input.strip_prefix(SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        // `::::` leaves a bare separator, which is not a trailing one.
        let rest = match rest.strip_suffix(SEPARATOR) {
            Some(body) if !body.is_empty() => body,
            _ => rest,
        };
        let segments = parse_segments(input, rest)?;
        Ok(Namespace { segments, absolute })
    }

    /// The scope segments, outermost first.
    #[inline]
    pub fn segments(&self) -> &[Symbol] {
        &self.segments
    }

    /// Check if this namespace is anchored at the root.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Check if this namespace is relative.
    #[inline]
    pub fn is_relative(&self) -> bool {
        !self.absolute
    }

    /// Check if this is the root namespace.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.absolute && self.segments.is_empty()
    }

    /// Check if this namespace has no segments (root or empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The innermost segment, if any.
    #[inline]
    pub fn last(&self) -> Option<&Symbol> {
        self.segments.last()
    }

    /// The enclosing namespace, or `None` for root and empty namespaces.
    #[must_use]
    pub fn parent(&self) -> Option<Namespace> {
        let (_, init) = self.segments.split_last()?;
        Some(Namespace {
            segments: init.iter().cloned().collect(),
            absolute: self.absolute,
        })
    }

    /// Append one segment.
    #[must_use]
    pub fn append(&self, segment: Symbol) -> Namespace {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Namespace {
            segments,
            absolute: self.absolute,
        }
    }

    /// Concatenate `other` onto this namespace.
    ///
    /// An absolute `other` is already anchored and is returned unchanged.
    #[must_use]
    pub fn concat(&self, other: &Namespace) -> Namespace {
        if other.absolute {
            return other.clone();
        }
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Namespace {
            segments,
            absolute: self.absolute,
        }
    }

    /// Anchor this namespace at the root.
    #[must_use]
    pub fn to_absolute(&self) -> Namespace {
        Namespace {
            segments: self.segments.clone(),
            absolute: true,
        }
    }

    /// Drop the root anchor.
    #[must_use]
    pub fn to_relative(&self) -> Namespace {
        Namespace {
            segments: self.segments.clone(),
            absolute: false,
        }
    }

    /// Iterate this namespace and each enclosing one, innermost first.
    ///
    /// `::A::B` yields `::A::B`, `::A`, `::`. The sequence always ends with
    /// the root (or the empty namespace, for relative input).
    pub fn enclosing_namespaces(&self) -> EnclosingNamespaces<'_> {
        EnclosingNamespaces {
            namespace: self,
            remaining: Some(self.segments.len()),
        }
    }
}

/// Split the body of a textual name on the separator, rejecting empty segments.
pub(crate) fn parse_segments(
    input: &str,
    body: &str,
) -> Result<SmallVec<[Symbol; 4]>, NameParseError> {
    if body.is_empty() {
        return Ok(SmallVec::new());
    }
    body.split(SEPARATOR)
        .map(|segment| {
            if segment.is_empty() || segment.contains(':') {
                Err(NameParseError::EmptySegment {
                    input: input.to_owned(),
                })
            } else {
                Ok(Symbol::from(segment))
            }
        })
        .collect()
}

/// Iterator returned by [`Namespace::enclosing_namespaces`].
#[derive(Clone, Debug)]
pub struct EnclosingNamespaces<'a> {
    namespace: &'a Namespace,
    /// Number of segments in the next namespace to yield; `None` once the
    /// outermost namespace has been produced.
    remaining: Option<usize>,
}

impl Iterator for EnclosingNamespaces<'_> {
    type Item = Namespace;

    fn next(&mut self) -> Option<Namespace> {
        let len = self.remaining?;
        self.remaining = len.checked_sub(1);
        Some(Namespace {
            segments: self.namespace.segments[..len].iter().cloned().collect(),
            absolute: self.namespace.absolute,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.map_or(0, |len| len + 1);
        (n, Some(n))
    }
}

impl ExactSizeIterator for EnclosingNamespaces<'_> {}

impl FusedIterator for EnclosingNamespaces<'_> {}

impl Default for Namespace {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str(SEPARATOR)?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({self})")
    }
}
