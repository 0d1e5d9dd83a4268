//! Signature environment.
//!
//! Stores type-level declarations (classes, modules, interfaces, extensions,
//! constants, global variables, type aliases) and resolves references to them
//! following the host language's scoping rules for qualified names.
//!
//! # Architecture
//!
//! ```text
//! parser ──Decl──▶ Env::add ──▶ registries (one per family)
//!                                   ▲
//! checker ──find_*(name, scope)─────┘ via resolve::{lexical, qualified}
//! ```
//!
//! - Classes, modules and constants resolve by outward lexical search
//! - Interfaces and aliases resolve by single-level qualification
//! - Globals and extensions are exact-key lookups

mod env;
mod error;
mod registry;
mod resolve;

pub use env::Env;
pub use error::EnvError;
pub use registry::ModuleEntry;

use std::sync::Once;

// A built environment is shared read-only between checking workers.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Env>();
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=sig_env=debug` for
/// insertion events or `RUST_LOG=sig_env=trace` to see every probed key.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host that already installed a subscriber keeps it.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
