//! Argument permutations.
//!
//! Orderings are produced in lexicographic order of argument positions, so
//! the identity ordering always comes first. Orderings that render to the
//! same text (repeated argument values) collapse to their first occurrence.

use ingr_ir::CallExpr;
use ingr_types::Printer;
use rustc_hash::FxHashSet;

/// Arity from which an uncapped expansion is logged, since `n!` orderings
/// are materialized.
const LARGE_PERMUTATION_ARITY: usize = 9;

/// All distinct argument orderings of `call`.
///
/// Every returned call owns an independent copy of its arguments. Calls of
/// arity ≤ 1, or above `max_arity`, yield a single structural copy.
pub fn expand_permutations(
    call: &CallExpr,
    printer: &Printer<'_>,
    max_arity: Option<usize>,
) -> Vec<CallExpr> {
    let arity = call.arity();
    if arity <= 1 || max_arity.is_some_and(|max| arity > max) {
        return vec![call.clone()];
    }
    if arity >= LARGE_PERMUTATION_ARITY {
        tracing::debug!(arity, ?max_arity, "permuting a large call");
    }

    let mut order: Vec<usize> = (0..arity).collect();
    let mut seen = FxHashSet::default();
    let mut permutations = Vec::new();
    loop {
        let args = order.iter().map(|&i| call.args[i].clone()).collect();
        let permuted = call.with_args(args);
        if seen.insert(printer.render_call(&permuted)) {
            permutations.push(permuted);
        }
        if !next_permutation(&mut order) {
            break;
        }
    }
    permutations
}

/// Permutation groups, one per input call, in input order.
pub fn expand_permutations_each(
    calls: &[CallExpr],
    printer: &Printer<'_>,
    max_arity: Option<usize>,
) -> Vec<Vec<CallExpr>> {
    calls
        .iter()
        .map(|call| expand_permutations(call, printer, max_arity))
        .collect()
}

/// Advance `order` to its lexicographic successor. Returns `false` once the
/// last permutation has been reached.
fn next_permutation(order: &mut [usize]) -> bool {
    let Some(pivot) = order.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };
    let mut successor = order.len() - 1;
    while order[successor] <= order[pivot] {
        successor -= 1;
    }
    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}
