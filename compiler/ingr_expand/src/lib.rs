//! Call-site ingredient expansion.
//!
//! Expands method calls taken from a program into a larger pool of
//! syntactically valid variants for repair and mutation search:
//!
//! 1. **Permutations** (`permute`): every distinct reordering of a call's arguments
//! 2. **Negations** (`negate`): `!call` for calls returning `boolean`
//! 3. **Member widening** (`widen`): the same receiver against every other
//!    member reachable from its type, with synthesized placeholder arguments
//! 4. **Canonicalization** (`canonicalize`): type/position-derived variable
//!    names, so structurally equal variants collapse during deduplication
//!
//! `Expander::expand_all` runs the passes (in parallel by default) and
//! returns the deduplicated union together with the original calls.
//!
//! # Pipeline Position
//!
//! ```text
//! collected call sites → **expand_all** → repair search driver
//! ```

mod canonicalize;
mod config;
mod error;
mod expander;
mod negate;
mod permute;
mod widen;

pub use canonicalize::{canonicalize, canonicalize_call};
pub use config::ExpandConfig;
pub use error::ExpandError;
pub use expander::{expand_all, Expander, Expansion, ExpansionStats};
pub use negate::{expand_negations, negate_site};
pub use permute::{expand_permutations, expand_permutations_each};
pub use widen::{arg_call, expand_members, zero_arg_call, Widened};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ingr_expand=debug` or `RUST_LOG=ingr_types=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
