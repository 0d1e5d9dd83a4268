//! Environment errors.
//!
//! Absence is not an error: most finders return `Option`. Only insertion
//! conflicts and alias misses are reported through [`EnvError`].

use sig_ir::{AliasName, DeclKind, Span};

/// Error raised by [`Env`](crate::Env) insertion or alias resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// A declaration collides with an existing registration under the same
    /// fully-qualified key.
    ///
    /// Raised for class/module kind clashes and for exact duplicates of any
    /// keyed kind. The environment is left unchanged.
    #[error(
        "`{name}` is already declared as {existing} at {existing_span}; \
         cannot declare it as {incoming} at {incoming_span}"
    )]
    NameConflict {
        /// Fully-qualified key, in display form.
        name: String,
        existing: DeclKind,
        existing_span: Span,
        incoming: DeclKind,
        incoming_span: Span,
    },

    /// No alias is registered under the resolved name.
    #[error("unknown type alias `{name}`")]
    UnknownAlias {
        /// The name after qualification by the lookup namespace.
        name: AliasName,
    },
}

impl EnvError {
    /// Check if this is a name conflict.
    #[inline]
    pub fn is_conflict(&self) -> bool {
        matches!(self, EnvError::NameConflict { .. })
    }
}
