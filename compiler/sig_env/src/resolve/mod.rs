//! Name resolution policies.
//!
//! Two policies, kept apart on purpose:
//!
//! - [`lexical_lookup`]: outward search. A relative name is tried in the
//!   current namespace, then in each enclosing namespace out to the root;
//!   the first occupied key wins. Used for classes, modules and constants.
//! - [`qualified_lookup`]: single-level qualification. A relative name is
//!   qualified by exactly the given namespace and nothing else is tried.
//!   Used for interfaces and aliases.
//!
//! Both take a `probe` closure that looks an absolute key up in one registry,
//! so the policies know nothing about what is stored.

use sig_ir::{ModuleName, NameKind, Namespace, QualifiedName};

/// Resolve `name` from `current_module` by innermost-scope-wins search.
///
/// An absolute name is probed as-is. A relative `current_module` is anchored
/// at the root first.
pub(crate) fn lexical_lookup<'a, T: ?Sized>(
    name: &ModuleName,
    current_module: &Namespace,
    mut probe: impl FnMut(&ModuleName) -> Option<&'a T>,
) -> Option<&'a T> {
    if name.is_absolute() {
        return probe(name);
    }
    let current_module = current_module.to_absolute();
    current_module.enclosing_namespaces().find_map(|scope| {
        let candidate = name.in_namespace(&scope);
        tracing::trace!(%candidate, "probing");
        probe(&candidate)
    })
}

/// Resolve `name` by qualifying it with exactly `namespace`.
///
/// Returns the probed key alongside the result so callers can report it.
pub(crate) fn qualified_lookup<'a, K: NameKind, T: ?Sized>(
    name: &QualifiedName<K>,
    namespace: &Namespace,
    probe: impl FnOnce(&QualifiedName<K>) -> Option<&'a T>,
) -> (QualifiedName<K>, Option<&'a T>) {
    let key = name.in_namespace(namespace).to_absolute();
    tracing::trace!(%key, "probing");
    let found = probe(&key);
    (key, found)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
