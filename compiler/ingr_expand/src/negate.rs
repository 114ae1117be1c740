//! Negation of boolean calls.

use ingr_ir::{CallSite, Expr, Idx};
use ingr_types::{Printer, TypePool};
use rustc_hash::FxHashSet;

/// Negated forms of every call in `sites` whose return type is `boolean`.
///
/// Non-boolean calls, and calls whose signature cannot be resolved, are
/// left out. Results are distinct by rendered text, in input order.
pub fn expand_negations(sites: &[CallSite], pool: &TypePool, printer: &Printer<'_>) -> Vec<Expr> {
    let mut seen = FxHashSet::default();
    let mut negations = Vec::new();
    for site in sites {
        match pool.signature(site.call.sig) {
            Ok(sig) if sig.ret == Idx::BOOLEAN => {
                let negated = negate_site(site, printer);
                if seen.insert(printer.render(&negated)) {
                    negations.push(negated);
                }
            }
            Ok(_) => {}
            Err(err) => tracing::debug!(%err, "skipping negation"),
        }
    }
    negations
}

/// `!call`, or the call's parent when the parent already is that negation.
///
/// The candidate is rendered in the call's own context. When stripping one
/// outer parenthesis pair leaves exactly the parent's text, the call already
/// sits under this negation and the parent is returned instead of nesting a
/// second one. Any other rendering falls back to the fresh `!call`.
pub fn negate_site(site: &CallSite, printer: &Printer<'_>) -> Expr {
    let candidate = Expr::not(Expr::Call(site.call.clone()));
    let Some(parent) = site.parent.as_deref() else {
        return candidate;
    };
    let rendered = printer.render_in(&candidate, site.parent_context());
    match strip_outer_parens(&rendered) {
        Some(inner) if inner == printer.render(parent) => parent.clone(),
        _ => candidate,
    }
}

fn strip_outer_parens(text: &str) -> Option<&str> {
    text.strip_prefix('(')?.strip_suffix(')')
}
