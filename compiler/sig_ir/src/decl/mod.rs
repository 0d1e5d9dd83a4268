//! Signature declarations.
//!
//! Declarations are produced by the signature parser and are immutable from
//! then on. Each one carries the name it was declared under (possibly
//! relative, in which case it is anchored at the root on insertion) and the
//! span it was parsed from.
//!
//! | Kind        | Key                     | Payload                              |
//! |-------------|-------------------------|--------------------------------------|
//! | class       | `ModuleName` (shared)   | type params, super class, members    |
//! | module      | `ModuleName` (shared)   | type params, self type, members      |
//! | interface   | `InterfaceName`         | type params, members                 |
//! | extension   | target `ModuleName`     | label, type params, members          |
//! | constant    | `ModuleName`            | type                                 |
//! | global      | identifier with sigil   | type                                 |
//! | alias       | `AliasName`             | type params, type                    |

mod member;

use std::fmt;

pub use member::{AttrKind, Member, MethodKind, MethodMember, MixinMember};

use crate::{AliasName, InterfaceName, ModuleName, SigType, Span, Symbol};

/// Kind of a declaration, used in conflict reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Module,
    Interface,
    Extension,
    Constant,
    Global,
    Alias,
}

impl DeclKind {
    /// Lowercase keyword for messages.
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Module => "module",
            DeclKind::Interface => "interface",
            DeclKind::Extension => "extension",
            DeclKind::Constant => "constant",
            DeclKind::Global => "global",
            DeclKind::Alias => "alias",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface of every declaration.
pub trait Declaration {
    /// The declaration kind.
    fn kind(&self) -> DeclKind;

    /// Where the declaration was parsed from.
    fn span(&self) -> Span;
}

/// Super class clause: `class A < B[T]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuperClass {
    /// Super class name, as written.
    pub name: ModuleName,
    /// Type arguments.
    pub args: Vec<SigType>,
}

/// `class Name[T] < Super ... end`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassDecl {
    pub name: ModuleName,
    pub type_params: Vec<Symbol>,
    pub super_class: Option<SuperClass>,
    pub members: Vec<Member>,
    pub span: Span,
}

/// `module Name[T] : SelfType ... end`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModuleDecl {
    pub name: ModuleName,
    pub type_params: Vec<Symbol>,
    /// Required type of `self` for classes including the module.
    pub self_type: Option<SigType>,
    pub members: Vec<Member>,
    pub span: Span,
}

/// `interface _Name[T] ... end`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceDecl {
    pub name: InterfaceName,
    pub type_params: Vec<Symbol>,
    pub members: Vec<Member>,
    pub span: Span,
}

/// `extension Target (Label) ... end`
///
/// Adds members to an existing class or module without replacing its
/// declaration. Several extensions may target the same module.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtensionDecl {
    /// The extended class or module.
    pub module_name: ModuleName,
    /// The label in parentheses; not part of any key.
    pub name: Symbol,
    pub type_params: Vec<Symbol>,
    pub members: Vec<Member>,
    pub span: Span,
}

/// `Name::Path: Type`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstantDecl {
    pub name: ModuleName,
    pub ty: SigType,
    pub span: Span,
}

/// `$name: Type`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlobalDecl {
    /// Identifier including the `$` sigil.
    pub name: Symbol,
    pub ty: SigType,
    pub span: Span,
}

/// `type name[T] = Type`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AliasDecl {
    pub name: AliasName,
    pub type_params: Vec<Symbol>,
    pub ty: SigType,
    pub span: Span,
}

impl ClassDecl {
    /// A class with no type parameters, super class, or members.
    pub fn new(name: ModuleName, span: Span) -> Self {
        ClassDecl {
            name,
            type_params: Vec::new(),
            super_class: None,
            members: Vec::new(),
            span,
        }
    }
}

impl ModuleDecl {
    /// A module with no type parameters, self type, or members.
    pub fn new(name: ModuleName, span: Span) -> Self {
        ModuleDecl {
            name,
            type_params: Vec::new(),
            self_type: None,
            members: Vec::new(),
            span,
        }
    }
}

impl InterfaceDecl {
    /// An interface with no type parameters or members.
    pub fn new(name: InterfaceName, span: Span) -> Self {
        InterfaceDecl {
            name,
            type_params: Vec::new(),
            members: Vec::new(),
            span,
        }
    }
}

impl ExtensionDecl {
    /// An extension with no type parameters or members.
    pub fn new(module_name: ModuleName, name: impl Into<Symbol>, span: Span) -> Self {
        ExtensionDecl {
            module_name,
            name: name.into(),
            type_params: Vec::new(),
            members: Vec::new(),
            span,
        }
    }
}

macro_rules! impl_declaration {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Declaration for $ty {
                #[inline]
                fn kind(&self) -> DeclKind {
                    DeclKind::$kind
                }

                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_declaration! {
    ClassDecl => Class,
    ModuleDecl => Module,
    InterfaceDecl => Interface,
    ExtensionDecl => Extension,
    ConstantDecl => Constant,
    GlobalDecl => Global,
    AliasDecl => Alias,
}

/// Any signature declaration, as handed over by the parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decl {
    Class(ClassDecl),
    Module(ModuleDecl),
    Interface(InterfaceDecl),
    Extension(ExtensionDecl),
    Constant(ConstantDecl),
    Global(GlobalDecl),
    Alias(AliasDecl),
}

impl Declaration for Decl {
    fn kind(&self) -> DeclKind {
        match self {
            Decl::Class(_) => DeclKind::Class,
            Decl::Module(_) => DeclKind::Module,
            Decl::Interface(_) => DeclKind::Interface,
            Decl::Extension(_) => DeclKind::Extension,
            Decl::Constant(_) => DeclKind::Constant,
            Decl::Global(_) => DeclKind::Global,
            Decl::Alias(_) => DeclKind::Alias,
        }
    }

    fn span(&self) -> Span {
        match self {
            Decl::Class(decl) => decl.span,
            Decl::Module(decl) => decl.span,
            Decl::Interface(decl) => decl.span,
            Decl::Extension(decl) => decl.span,
            Decl::Constant(decl) => decl.span,
            Decl::Global(decl) => decl.span,
            Decl::Alias(decl) => decl.span,
        }
    }
}

macro_rules! impl_from_decl {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Decl {
                #[inline]
                fn from(decl: $ty) -> Self {
                    Decl::$variant(decl)
                }
            }
        )*
    };
}

impl_from_decl! {
    ClassDecl => Class,
    ModuleDecl => Module,
    InterfaceDecl => Interface,
    ExtensionDecl => Extension,
    ConstantDecl => Constant,
    GlobalDecl => Global,
    AliasDecl => Alias,
}
