//! Declaration registries.
//!
//! One table per declaration family, keyed by fully-qualified name:
//!
//! ```text
//! Env
//!     └── DeclTable<ModuleName, ModuleEntry>   (classes + modules, one key space)
//!     └── DeclTable<InterfaceName, InterfaceDecl>
//!     └── DeclTable<ModuleName, ConstantDecl>
//!     └── DeclTable<Symbol, GlobalDecl>        (flat, sigil included)
//!     └── DeclTable<AliasName, AliasDecl>
//!     └── ExtensionTable                       (multi-valued, insertion order)
//! ```
//!
//! # Design Decisions
//!
//! - Keyed tables use `BTreeMap` so iteration is deterministic
//! - Extensions use `FxHashMap<ModuleName, Vec<_>>`; they are only ever
//!   fetched by exact key
//! - Insertion never overwrites: an occupied key is a conflict

use std::borrow::Borrow;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use sig_ir::{ClassDecl, DeclKind, Declaration, ExtensionDecl, ModuleDecl, ModuleName, Span};

use crate::EnvError;

/// A class or module registered under a shared key.
///
/// A fully-qualified name denotes at most one of the two.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModuleEntry {
    Class(ClassDecl),
    Module(ModuleDecl),
}

impl ModuleEntry {
    /// The class declaration, if this entry is a class.
    #[inline]
    pub fn as_class(&self) -> Option<&ClassDecl> {
        match self {
            ModuleEntry::Class(decl) => Some(decl),
            ModuleEntry::Module(_) => None,
        }
    }

    /// The module declaration, if this entry is a module.
    #[inline]
    pub fn as_module(&self) -> Option<&ModuleDecl> {
        match self {
            ModuleEntry::Module(decl) => Some(decl),
            ModuleEntry::Class(_) => None,
        }
    }

    /// The name as declared.
    pub fn name(&self) -> &ModuleName {
        match self {
            ModuleEntry::Class(decl) => &decl.name,
            ModuleEntry::Module(decl) => &decl.name,
        }
    }
}

impl Declaration for ModuleEntry {
    fn kind(&self) -> DeclKind {
        match self {
            ModuleEntry::Class(_) => DeclKind::Class,
            ModuleEntry::Module(_) => DeclKind::Module,
        }
    }

    fn span(&self) -> Span {
        match self {
            ModuleEntry::Class(decl) => decl.span,
            ModuleEntry::Module(decl) => decl.span,
        }
    }
}

/// Single-occupant table from a resolved key to a declaration.
#[derive(Clone, Debug)]
pub(crate) struct DeclTable<K, D> {
    by_name: BTreeMap<K, D>,
}

impl<K, D> Default for DeclTable<K, D> {
    fn default() -> Self {
        DeclTable {
            by_name: BTreeMap::new(),
        }
    }
}

impl<K: Ord + fmt::Display, D: Declaration> DeclTable<K, D> {
    /// Register `decl` under `key`.
    ///
    /// Fails with [`EnvError::NameConflict`] if the key is taken; the table
    /// is unchanged in that case.
    pub(crate) fn insert(&mut self, key: K, decl: D) -> Result<(), EnvError> {
        match self.by_name.entry(key) {
            Entry::Occupied(entry) => {
                let existing = entry.get();
                Err(EnvError::NameConflict {
                    name: entry.key().to_string(),
                    existing: existing.kind(),
                    existing_span: existing.span(),
                    incoming: decl.kind(),
                    incoming_span: decl.span(),
                })
            }
            Entry::Vacant(entry) => {
                entry.insert(decl);
                Ok(())
            }
        }
    }

    #[inline]
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&D>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.by_name.get(key)
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.by_name.contains_key(key)
    }

    /// Declarations in key order.
    pub(crate) fn values(&self) -> impl Iterator<Item = &D> {
        self.by_name.values()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.by_name.len()
    }
}

/// Extensions grouped by the absolute name of the module they extend.
#[derive(Clone, Debug, Default)]
pub(crate) struct ExtensionTable {
    by_module: FxHashMap<ModuleName, Vec<ExtensionDecl>>,
    count: usize,
}

impl ExtensionTable {
    /// Append an extension to its target's list. Never conflicts.
    pub(crate) fn push(&mut self, key: ModuleName, decl: ExtensionDecl) {
        self.by_module.entry(key).or_default().push(decl);
        self.count += 1;
    }

    /// Extensions of exactly `key`, in insertion order.
    #[inline]
    pub(crate) fn get(&self, key: &ModuleName) -> &[ExtensionDecl] {
        self.by_module.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.count
    }
}
