//! Expansion errors.
//!
//! None of these abort a run: each one marks a call or signature that was
//! skipped, and is logged and counted in `ExpansionStats`.

use ingr_ir::{Idx, SigId};
use ingr_types::TypeError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// Receiver type or member could not be resolved.
    #[error(transparent)]
    Type(#[from] TypeError),
    /// A parameter type admits no synthesized placeholder.
    #[error("no placeholder for parameter {index} ({param:?}) of {sig:?}")]
    NoPlaceholder { sig: SigId, index: usize, param: Idx },
}
