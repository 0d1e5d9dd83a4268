//! Declared type expressions.
//!
//! `SigType` is the type payload carried by constants, globals, aliases,
//! method overloads and super-class arguments. The environment stores it
//! as-is; names inside it are resolved later by the checker, using the same
//! lookups the environment exposes.

use std::fmt;

use crate::{AliasName, InterfaceName, ModuleName, Symbol};

/// A declared type expression, preserving the structure written in the
/// signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SigType {
    /// `any`: opt out of checking.
    Any,
    /// `nil`
    Nil,
    /// `bool`
    Bool,
    /// `void`
    Void,
    /// `bot`: the empty type.
    Bot,
    /// `top`: the universal type.
    Top,
    /// `self`
    SelfType,
    /// `instance`: the instance type of the enclosing class.
    Instance,
    /// A type variable bound by the enclosing declaration.
    Var(Symbol),
    /// Instance type of a class or module: `Array[Integer]`.
    Class {
        /// The class name as written.
        name: ModuleName,
        /// Type arguments, empty if non-generic.
        args: Vec<SigType>,
    },
    /// Singleton type of a class or module: `singleton(String)`.
    Singleton(ModuleName),
    /// An interface type: `_Each[String]`.
    Interface {
        /// The interface name as written.
        name: InterfaceName,
        /// Type arguments, empty if non-generic.
        args: Vec<SigType>,
    },
    /// Reference to a type alias.
    Alias(AliasName),
    /// `A | B`
    Union(Vec<SigType>),
    /// `T?`
    Optional(Box<SigType>),
    /// `[A, B]`
    Tuple(Vec<SigType>),
    /// A block or method type: `^(A, B) -> R`.
    Proc {
        /// Parameter types.
        params: Vec<SigType>,
        /// Return type.
        ret: Box<SigType>,
    },
}

impl SigType {
    /// Create a class instance type without arguments.
    #[inline]
    pub fn class(name: ModuleName) -> Self {
        SigType::Class {
            name,
            args: Vec::new(),
        }
    }

    /// Create a class instance type with arguments.
    #[inline]
    pub fn class_with_args(name: ModuleName, args: Vec<SigType>) -> Self {
        SigType::Class { name, args }
    }

    /// Create an interface type without arguments.
    #[inline]
    pub fn interface(name: InterfaceName) -> Self {
        SigType::Interface {
            name,
            args: Vec::new(),
        }
    }

    /// Create an optional type.
    #[inline]
    pub fn optional(inner: SigType) -> Self {
        SigType::Optional(Box::new(inner))
    }

    /// Create a proc type.
    #[inline]
    pub fn proc(params: Vec<SigType>, ret: SigType) -> Self {
        SigType::Proc {
            params,
            ret: Box::new(ret),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[SigType], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[SigType]) -> fmt::Result {
    if args.is_empty() {
        return Ok(());
    }
    f.write_str("[")?;
    write_list(f, args, ", ")?;
    f.write_str("]")
}

impl fmt::Display for SigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigType::Any => f.write_str("any"),
            SigType::Nil => f.write_str("nil"),
            SigType::Bool => f.write_str("bool"),
            SigType::Void => f.write_str("void"),
            SigType::Bot => f.write_str("bot"),
            SigType::Top => f.write_str("top"),
            SigType::SelfType => f.write_str("self"),
            SigType::Instance => f.write_str("instance"),
            SigType::Var(name) => write!(f, "{name}"),
            SigType::Class { name, args } => {
                write!(f, "{name}")?;
                write_args(f, args)
            }
            SigType::Singleton(name) => write!(f, "singleton({name})"),
            SigType::Interface { name, args } => {
                write!(f, "{name}")?;
                write_args(f, args)
            }
            SigType::Alias(name) => write!(f, "{name}"),
            SigType::Union(types) => write_list(f, types, " | "),
            SigType::Optional(inner) => match inner.as_ref() {
                SigType::Union(_) | SigType::Proc { .. } => write!(f, "({inner})?"),
                _ => write!(f, "{inner}?"),
            },
            SigType::Tuple(types) => {
                f.write_str("[")?;
                write_list(f, types, ", ")?;
                f.write_str("]")
            }
            SigType::Proc { params, ret } => {
                f.write_str("^(")?;
                write_list(f, params, ", ")?;
                write!(f, ") -> {ret}")
            }
        }
    }
}
