//! Members of class, module, interface and extension bodies.

use crate::{ModuleName, SigType, Span, Symbol};

/// A member declared in a class, module, interface or extension body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Member {
    /// `def name: ^(A) -> R | ^() -> R`
    Method(MethodMember),
    /// `include M[T]`
    Include(MixinMember),
    /// `extend M[T]`
    Extend(MixinMember),
    /// `@name: T`
    Ivar {
        /// Instance variable name including the `@` sigil.
        name: Symbol,
        /// Declared type.
        ty: SigType,
        /// Source location.
        span: Span,
    },
    /// `attr_reader name: T` / `attr_accessor name: T`
    Attr {
        /// Reader only or reader and writer.
        kind: AttrKind,
        /// Attribute name.
        name: Symbol,
        /// Declared type.
        ty: SigType,
        /// Source location.
        span: Span,
    },
}

/// A method member with one or more overloads.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodMember {
    /// Method name.
    pub name: Symbol,
    /// Which receiver the method is defined on.
    pub kind: MethodKind,
    /// Overloads, each a [`SigType::Proc`].
    pub overloads: Vec<SigType>,
    /// Source location.
    pub span: Span,
}

/// Receiver of a method member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// `def foo`
    #[default]
    Instance,
    /// `def self.foo`
    Singleton,
    /// `def self?.foo`: both instance and singleton.
    Both,
}

/// An `include` or `extend` member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MixinMember {
    /// Mixed-in module name, as written.
    pub name: ModuleName,
    /// Type arguments.
    pub args: Vec<SigType>,
    /// Source location.
    pub span: Span,
}

/// Kind of an attribute member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrKind {
    Reader,
    Accessor,
}

impl Member {
    /// Source location of the member.
    pub fn span(&self) -> Span {
        match self {
            Member::Method(method) => method.span,
            Member::Include(mixin) | Member::Extend(mixin) => mixin.span,
            Member::Ivar { span, .. } | Member::Attr { span, .. } => *span,
        }
    }

    /// The method, if this member is one.
    pub fn as_method(&self) -> Option<&MethodMember> {
        match self {
            Member::Method(method) => Some(method),
            _ => None,
        }
    }
}

impl MethodKind {
    /// Check if the method is callable on instances.
    #[inline]
    pub fn is_instance(self) -> bool {
        matches!(self, MethodKind::Instance | MethodKind::Both)
    }

    /// Check if the method is callable on the class object.
    #[inline]
    pub fn is_singleton(self) -> bool {
        matches!(self, MethodKind::Singleton | MethodKind::Both)
    }
}
