//! Signature IR
//!
//! Value types shared between the signature parser, the signature
//! environment, and the checker:
//! - Symbols for identifier segments
//! - Spans for source locations
//! - Namespaces and qualified names (module, interface, alias)
//! - Declared type expressions
//! - Declarations (class, module, interface, extension, constant, global, alias)
//!
//! # Design Philosophy
//!
//! - **Values, not handles**: names compare by their segments, never by
//!   identity, so there is no shared interner to thread through callers.
//! - **Anchor by construction**: a qualified name's absoluteness is read off
//!   its namespace and cannot disagree with it.
//! - **Immutable**: every name operation returns a new value.

pub mod decl;
mod error;
mod name;
mod namespace;
mod sig_type;
mod span;
mod symbol;

pub use decl::{
    AliasDecl, ClassDecl, ConstantDecl, Decl, DeclKind, Declaration, ExtensionDecl, GlobalDecl,
    InterfaceDecl, Member, ModuleDecl, SuperClass,
};
pub use error::NameParseError;
pub use name::{
    AliasKind, AliasName, InterfaceKind, InterfaceName, ModuleKind, ModuleName, NameKind,
    QualifiedName,
};
pub use namespace::{EnclosingNamespaces, Namespace, SEPARATOR};
pub use sig_type::SigType;
pub use span::{Span, SpanError};
pub use symbol::Symbol;
