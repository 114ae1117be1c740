//! Expansion facade.
//!
//! Runs the permutation, negation and member-widening passes over the same
//! input and merges their output with the original calls. The merge is the
//! only synchronization point: candidates are deduplicated by the rendered
//! text of their normalized form, first occurrence wins.

use ingr_ir::{CallExpr, CallSite, Expr, StringInterner};
use ingr_types::{Printer, TypePool};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::canonicalize::canonicalize;
use crate::negate::expand_negations;
use crate::permute::{expand_permutations, expand_permutations_each};
use crate::widen::{expand_members, Widened};
use crate::ExpandConfig;

/// Counters for one expansion run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    pub originals: usize,
    /// Candidates produced by each pass, before the final merge.
    pub permutations: usize,
    pub negations: usize,
    pub widened: usize,
    /// Candidates dropped by the final merge as textual duplicates.
    pub duplicates: usize,
    pub skipped_receivers: usize,
    pub skipped_signatures: usize,
}

/// Deduplicated candidates of one expansion run.
#[derive(Clone, Debug)]
pub struct Expansion {
    /// Originals, then permutations, negations and widened calls.
    pub candidates: Vec<Expr>,
    pub stats: ExpansionStats,
}

/// Expands call sites against a type pool.
pub struct Expander<'a> {
    pool: &'a TypePool,
    interner: &'a StringInterner,
    config: ExpandConfig,
}

impl<'a> Expander<'a> {
    pub fn new(pool: &'a TypePool, interner: &'a StringInterner) -> Self {
        Self::with_config(pool, interner, ExpandConfig::default())
    }

    pub fn with_config(
        pool: &'a TypePool,
        interner: &'a StringInterner,
        config: ExpandConfig,
    ) -> Self {
        Expander {
            pool,
            interner,
            config,
        }
    }

    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }

    pub fn printer(&self) -> Printer<'a> {
        Printer::new(self.pool, self.interner)
    }

    /// All distinct argument orderings of one call.
    pub fn permutations(&self, call: &CallExpr) -> Vec<CallExpr> {
        expand_permutations(call, &self.printer(), self.config.max_permutation_arity)
    }

    /// Permutation groups, one per call.
    pub fn permutations_each(&self, calls: &[CallExpr]) -> Vec<Vec<CallExpr>> {
        if !self.config.parallel {
            return expand_permutations_each(
                calls,
                &self.printer(),
                self.config.max_permutation_arity,
            );
        }
        calls.par_iter().map(|call| self.permutations(call)).collect()
    }

    /// Negated forms of the boolean calls among `sites`.
    pub fn negations(&self, sites: &[CallSite]) -> Vec<Expr> {
        expand_negations(sites, self.pool, &self.printer())
    }

    /// Calls to other members reachable from each call's receiver.
    pub fn members(&self, calls: &[CallExpr]) -> Widened {
        expand_members(calls, self.pool, self.interner, self.config.parallel)
    }

    /// Originals plus every enabled pass, deduplicated.
    #[tracing::instrument(level = "debug", skip_all, fields(count = sites.len()))]
    pub fn expand_all(&self, sites: &[CallSite]) -> Expansion {
        let calls: Vec<CallExpr> = sites.iter().map(|site| site.call.clone()).collect();

        let permute = || {
            if self.config.permutations {
                self.permutations_each(&calls)
            } else {
                Vec::new()
            }
        };
        let negate = || {
            if self.config.negations {
                self.negations(sites)
            } else {
                Vec::new()
            }
        };
        let widen = || {
            if self.config.widen_members {
                self.members(&calls)
            } else {
                Widened::default()
            }
        };

        let (permuted, (negated, widened)) = if self.config.parallel {
            rayon::join(permute, || rayon::join(negate, widen))
        } else {
            (permute(), (negate(), widen()))
        };

        let mut merge = Merge::new(self);
        for call in calls {
            merge.push(Expr::Call(call));
        }
        merge.stats.originals = sites.len();

        for call in permuted.into_iter().flatten() {
            merge.stats.permutations += 1;
            merge.push(Expr::Call(call));
        }
        for expr in negated {
            merge.stats.negations += 1;
            merge.push(expr);
        }
        merge.stats.skipped_receivers = widened.skipped_receivers;
        merge.stats.skipped_signatures = widened.skipped_signatures;
        for call in widened.calls {
            merge.stats.widened += 1;
            merge.push(Expr::Call(call));
        }

        tracing::debug!(
            originals = merge.stats.originals,
            candidates = merge.candidates.len(),
            duplicates = merge.stats.duplicates,
            "expansion complete"
        );
        Expansion {
            candidates: merge.candidates,
            stats: merge.stats,
        }
    }
}

/// Distinct-by-text accumulator.
struct Merge<'e, 'a> {
    expander: &'e Expander<'a>,
    printer: Printer<'a>,
    seen: FxHashSet<String>,
    candidates: Vec<Expr>,
    stats: ExpansionStats,
}

impl<'e, 'a> Merge<'e, 'a> {
    fn new(expander: &'e Expander<'a>) -> Self {
        Merge {
            expander,
            printer: expander.printer(),
            seen: FxHashSet::default(),
            candidates: Vec::new(),
            stats: ExpansionStats::default(),
        }
    }

    fn push(&mut self, mut expr: Expr) {
        if self.expander.config.normalize {
            canonicalize(&mut expr, self.expander.pool, self.expander.interner);
        }
        if self.seen.insert(self.printer.render(&expr)) {
            self.candidates.push(expr);
        } else {
            self.stats.duplicates += 1;
        }
    }
}

/// Expand `sites` with the default configuration.
pub fn expand_all(sites: &[CallSite], pool: &TypePool, interner: &StringInterner) -> Expansion {
    Expander::new(pool, interner).expand_all(sites)
}
