//! The signature environment.
//!
//! `Env` owns one registry per declaration family. It is filled once through
//! [`Env::add`] (the only mutator) and then queried read-only by the checker,
//! which passes the namespace it is currently checking as `current_module`.
//!
//! # Lookup Policies
//!
//! | Query               | Policy                              | Miss                  |
//! |---------------------|-------------------------------------|-----------------------|
//! | `find_class`        | outward lexical search              | `None`                |
//! | `find_module`       | outward lexical search              | `None`                |
//! | `find_const`        | outward lexical search              | `None`                |
//! | `find_interface`    | single-level qualification          | `None`                |
//! | `find_alias`        | single-level qualification          | `UnknownAlias` error  |
//! | `find_gvar`         | exact identifier                    | `None`                |
//! | `find_extensions`   | exact absolute name                 | empty slice           |
//! | `is_const_name`     | exact fully-qualified name          | `false`               |

use sig_ir::{
    AliasDecl, AliasName, ClassDecl, ConstantDecl, Decl, Declaration, ExtensionDecl, GlobalDecl,
    InterfaceDecl, InterfaceName, ModuleDecl, ModuleName, Namespace, Symbol,
};

use crate::registry::{DeclTable, ExtensionTable, ModuleEntry};
use crate::resolve::{lexical_lookup, qualified_lookup};
use crate::EnvError;

/// Registry of signature declarations with scoped name resolution.
///
/// Built single-threaded, then shared by reference: `&Env` is `Send + Sync`
/// and no query mutates it.
#[derive(Clone, Debug, Default)]
pub struct Env {
    /// Classes and modules share one key space.
    modules: DeclTable<ModuleName, ModuleEntry>,
    interfaces: DeclTable<InterfaceName, InterfaceDecl>,
    extensions: ExtensionTable,
    constants: DeclTable<ModuleName, ConstantDecl>,
    globals: DeclTable<Symbol, GlobalDecl>,
    aliases: DeclTable<AliasName, AliasDecl>,
}

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an environment from a batch of declarations.
    ///
    /// Stops at the first conflict.
    pub fn from_decls(decls: impl IntoIterator<Item = Decl>) -> Result<Self, EnvError> {
        let mut env = Self::new();
        env.add_all(decls)?;
        Ok(env)
    }

    // === Insertion ===

    /// Register a declaration.
    ///
    /// Relative names are anchored at the root. Class and module names share
    /// a key space; any occupied key (other than an extension target) is a
    /// [`EnvError::NameConflict`], including exact duplicates. On error the
    /// environment is unchanged.
    pub fn add(&mut self, decl: impl Into<Decl>) -> Result<(), EnvError> {
        self.insert(decl.into())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(kind = %decl.kind(), span = %decl.span()))]
    fn insert(&mut self, decl: Decl) -> Result<(), EnvError> {
        let result = match decl {
            Decl::Class(decl) => {
                let key = decl.name.to_absolute();
                self.modules.insert(key, ModuleEntry::Class(decl))
            }
            Decl::Module(decl) => {
                let key = decl.name.to_absolute();
                self.modules.insert(key, ModuleEntry::Module(decl))
            }
            Decl::Interface(decl) => {
                let key = decl.name.to_absolute();
                self.interfaces.insert(key, decl)
            }
            Decl::Extension(decl) => {
                let key = decl.module_name.to_absolute();
                self.extensions.push(key, decl);
                Ok(())
            }
            Decl::Constant(decl) => {
                let key = decl.name.to_absolute();
                self.constants.insert(key, decl)
            }
            Decl::Global(decl) => {
                let key = decl.name.clone();
                self.globals.insert(key, decl)
            }
            Decl::Alias(decl) => {
                let key = decl.name.to_absolute();
                self.aliases.insert(key, decl)
            }
        };
        result.inspect_err(|err| tracing::debug!(%err, "declaration rejected"))
    }

    /// Register a batch of declarations in order, stopping at the first error.
    ///
    /// Declarations before the failing one stay registered; the caller is
    /// expected to abandon the environment on error.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn add_all(&mut self, decls: impl IntoIterator<Item = Decl>) -> Result<(), EnvError> {
        for decl in decls {
            self.add(decl)?;
        }
        tracing::debug!(declarations = self.len(), "batch registered");
        Ok(())
    }

    // === Classes and Modules ===

    /// Resolve a class or module reference by outward lexical search.
    ///
    /// Returns the entry at the first occupied candidate key, whichever kind
    /// it is.
    #[tracing::instrument(level = "trace", skip_all, fields(name = %name, current_module = %current_module))]
    pub fn find_class_or_module(
        &self,
        name: &ModuleName,
        current_module: &Namespace,
    ) -> Option<&ModuleEntry> {
        lexical_lookup(name, current_module, |key| self.modules.get(key))
    }

    /// Resolve a class reference by outward lexical search.
    ///
    /// If the innermost match is a module, the result is `None`: the module
    /// shadows any outer class of the same name.
    pub fn find_class(&self, name: &ModuleName, current_module: &Namespace) -> Option<&ClassDecl> {
        self.find_class_or_module(name, current_module)?.as_class()
    }

    /// Resolve a module reference by outward lexical search.
    ///
    /// If the innermost match is a class, the result is `None`.
    pub fn find_module(
        &self,
        name: &ModuleName,
        current_module: &Namespace,
    ) -> Option<&ModuleDecl> {
        self.find_class_or_module(name, current_module)?.as_module()
    }

    /// Check if exactly this fully-qualified name is a registered class.
    pub fn is_class_name(&self, name: &ModuleName) -> bool {
        self.modules
            .get(&name.to_absolute())
            .is_some_and(|entry| entry.as_class().is_some())
    }

    /// Check if exactly this fully-qualified name is a registered module.
    pub fn is_module_name(&self, name: &ModuleName) -> bool {
        self.modules
            .get(&name.to_absolute())
            .is_some_and(|entry| entry.as_module().is_some())
    }

    /// Extensions registered against exactly `module_name`, in insertion order.
    ///
    /// `module_name` must already be resolved; a relative name is not
    /// searched for and yields an empty slice.
    pub fn find_extensions(&self, module_name: &ModuleName) -> &[ExtensionDecl] {
        self.extensions.get(module_name)
    }

    // === Interfaces and Aliases ===

    /// Resolve an interface by qualifying a relative name with `namespace`.
    ///
    /// Enclosing namespaces are not searched.
    #[tracing::instrument(level = "trace", skip_all, fields(name = %name, namespace = %namespace))]
    pub fn find_interface(
        &self,
        name: &InterfaceName,
        namespace: &Namespace,
    ) -> Option<&InterfaceDecl> {
        let (_, found) = qualified_lookup(name, namespace, |key| self.interfaces.get(key));
        found
    }

    /// Resolve a type alias by qualifying a relative name with `namespace`.
    ///
    /// Enclosing namespaces are not searched. Unlike the other finders, a miss
    /// is an error: alias references are never optional probes.
    #[tracing::instrument(level = "trace", skip_all, fields(name = %name, namespace = %namespace))]
    pub fn find_alias(
        &self,
        name: &AliasName,
        namespace: &Namespace,
    ) -> Result<&AliasDecl, EnvError> {
        match qualified_lookup(name, namespace, |key| self.aliases.get(key)) {
            (_, Some(decl)) => Ok(decl),
            (key, None) => Err(EnvError::UnknownAlias { name: key }),
        }
    }

    // === Constants and Globals ===

    /// Resolve a constant reference by outward lexical search.
    #[tracing::instrument(level = "trace", skip_all, fields(name = %name, current_module = %current_module))]
    pub fn find_const(
        &self,
        name: &ModuleName,
        current_module: &Namespace,
    ) -> Option<&ConstantDecl> {
        lexical_lookup(name, current_module, |key| self.constants.get(key))
    }

    /// Check if exactly this fully-qualified name is a registered constant.
    ///
    /// No scope search: `Steep` is not a constant name just because
    /// `Steep::Version` is.
    pub fn is_const_name(&self, name: &ModuleName) -> bool {
        self.constants.contains(&name.to_absolute())
    }

    /// Look up a global variable by its identifier, sigil included.
    pub fn find_gvar(&self, name: &str) -> Option<&GlobalDecl> {
        self.globals.get(name)
    }

    // === Iteration ===

    /// Registered classes in name order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.modules.values().filter_map(ModuleEntry::as_class)
    }

    /// Registered modules in name order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleDecl> {
        self.modules.values().filter_map(ModuleEntry::as_module)
    }

    /// Registered interfaces in name order.
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceDecl> {
        self.interfaces.values()
    }

    /// Registered constants in name order.
    pub fn constants(&self) -> impl Iterator<Item = &ConstantDecl> {
        self.constants.values()
    }

    /// Registered global variables in identifier order.
    pub fn globals(&self) -> impl Iterator<Item = &GlobalDecl> {
        self.globals.values()
    }

    /// Registered aliases in name order.
    pub fn aliases(&self) -> impl Iterator<Item = &AliasDecl> {
        self.aliases.values()
    }

    /// Total number of registered declarations, extensions included.
    pub fn len(&self) -> usize {
        self.modules.len()
            + self.interfaces.len()
            + self.extensions.len()
            + self.constants.len()
            + self.globals.len()
            + self.aliases.len()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
