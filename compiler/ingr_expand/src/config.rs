//! Expansion configuration.

/// Configuration for an expansion run.
#[expect(
    clippy::struct_excessive_bools,
    reason = "independent pass toggles, not a state machine"
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Generate argument reorderings.
    pub permutations: bool,
    /// Generate negations of boolean calls.
    pub negations: bool,
    /// Generate calls to other members reachable from the receiver.
    pub widen_members: bool,

    /// Calls with more arguments than this yield only their identity copy.
    /// `None` means every call is fully permuted, which materializes `n!`
    /// orderings; set a cap when inputs may carry many arguments.
    pub max_permutation_arity: Option<usize>,

    /// Canonicalize every candidate before deduplication, so variants that
    /// differ only in variable naming collapse to one.
    pub normalize: bool,

    /// Run passes on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            permutations: true,
            negations: true,
            widen_members: true,
            max_permutation_arity: None,
            normalize: true,
            parallel: true,
        }
    }
}

impl ExpandConfig {
    /// Create a config that caps permutation arity.
    pub fn with_max_permutation_arity(max_arity: usize) -> Self {
        Self {
            max_permutation_arity: Some(max_arity),
            ..Default::default()
        }
    }

    /// Run every pass on the calling thread.
    #[must_use]
    pub fn sequential(self) -> Self {
        Self {
            parallel: false,
            ..self
        }
    }

    /// Deduplicate on the text of candidates as generated.
    #[must_use]
    pub fn without_normalization(self) -> Self {
        Self {
            normalize: false,
            ..self
        }
    }

    /// Whether a call of `arity` arguments is permuted.
    pub fn permutes(&self, arity: usize) -> bool {
        self.max_permutation_arity.map_or(true, |max| arity <= max)
    }
}
