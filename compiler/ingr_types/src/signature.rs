//! Callable member signatures.

use ingr_ir::{Idx, Name};

/// Resolved identity of a callable member.
///
/// Identity is structural: the pool interns signatures, so two equal
/// signatures always map to the same `SigId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub declaring: Idx,
    pub name: Name,
    pub params: Vec<Idx>,
    pub ret: Idx,
    /// Declared type arguments, carried into zero-parameter calls.
    pub type_args: Vec<Idx>,
    pub is_static: bool,
}

impl Signature {
    /// Instance method with no type arguments.
    pub fn method(declaring: Idx, name: Name, params: Vec<Idx>, ret: Idx) -> Self {
        Signature {
            declaring,
            name,
            params,
            ret,
            type_args: Vec::new(),
            is_static: false,
        }
    }

    #[must_use]
    pub fn with_type_args(mut self, type_args: Vec<Idx>) -> Self {
        self.type_args = type_args;
        self
    }

    #[must_use]
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
