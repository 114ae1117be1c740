//! Type system collaborator for ingredient expansion.
//!
//! - `TypePool`: classes, supertypes, declared members, interned signatures
//! - `reachable_members`: transitive member lookup through supertypes
//! - `Printer`: deterministic rendering used as the deduplication key
//!
//! The expansion passes only read the pool, so one `&TypePool` is shared by
//! all parallel tasks.

mod error;
mod pool;
mod render;
mod signature;

pub use error::TypeError;
pub use pool::{TypeKind, TypePool};
pub use render::Printer;
pub use signature::Signature;
