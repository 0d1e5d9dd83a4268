//! Owned identifier segments.
//!
//! Symbols are compared structurally. There is no interner: two symbols are
//! equal iff their text is equal, so names built by independent parsers (or
//! threads) can be compared without sharing any table.

use std::borrow::Borrow;
use std::fmt;

/// A single identifier: a namespace segment, a final name segment, a type
/// parameter, or a global variable identifier including its sigil (`$VERSION`).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(Box<str>);

impl Symbol {
    /// Create a symbol from its text.
    #[inline]
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Symbol(text.into())
    }

    /// The symbol text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the symbol text begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: char) -> bool {
        self.0.starts_with(prefix)
    }
}

// `Hash` and `Eq` on `Box<str>` agree with `str`, so registries keyed by
// `Symbol` can be probed with a plain `&str`.
impl Borrow<str> for Symbol {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    #[inline]
    fn from(text: &str) -> Self {
        Symbol::new(text)
    }
}

impl From<String> for Symbol {
    #[inline]
    fn from(text: String) -> Self {
        Symbol::new(text)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", &*self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_structural_eq() {
        assert_eq!(Symbol::from("Object"), Symbol::new(String::from("Object")));
        assert_ne!(Symbol::from("Object"), Symbol::from("object"));
    }

    #[test]
    fn test_symbol_borrow_lookup() {
        let mut set = HashSet::new();
        set.insert(Symbol::from("$VERSION"));
        assert!(set.contains("$VERSION"));
        assert!(!set.contains("$HOGE"));
    }

    #[test]
    fn test_symbol_ord() {
        assert!(Symbol::from("A") < Symbol::from("B"));
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::from("_Each").to_string(), "_Each");
        assert!(Symbol::from("_Each").starts_with('_'));
    }
}
