//! Type pool errors.

use ingr_ir::{Idx, SigId};

/// Failure to resolve a type or member in the pool.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// Type handle is unknown or the unresolved sentinel.
    #[error("type {ty:?} cannot be resolved")]
    UnresolvedType { ty: Idx },
    /// Operation needs a class type.
    #[error("type {ty:?} is not a class type")]
    NotAClass { ty: Idx },
    #[error("unknown signature {sig:?}")]
    UnknownSignature { sig: SigId },
    /// A class with this fully-qualified name already exists.
    #[error("type `{name}` is already declared")]
    DuplicateType { name: String },
}
