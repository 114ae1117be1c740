//! Member widening.
//!
//! Substitutes every other callable member reachable from a call's receiver
//! type, keeping the receiver. Zero-parameter members become plain calls;
//! members with parameters get one placeholder variable per parameter
//! (`var_0`, `var_1`, ...), after which the whole call is canonicalized so
//! synthesized and organically sourced calls share one naming scheme.
//! Placeholder names never collide with a name already read by the receiver.

use ingr_ir::visitor::{walk_field_mut, VisitorMut};
use ingr_ir::{CallExpr, Expr, FieldRef, Name, SigId, StringInterner, VarRef};
use ingr_types::{Printer, Signature, TypePool};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::canonicalize::canonicalize_call;
use crate::ExpandError;

/// Result of widening a batch of calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Widened {
    /// Distinct by rendered text; zero-parameter members first per call.
    pub calls: Vec<CallExpr>,
    /// Calls whose receiver type could not be resolved.
    pub skipped_receivers: usize,
    /// Signatures skipped for lack of a constructible placeholder.
    pub skipped_signatures: usize,
}

/// Widening of one receiver/signature pair.
#[derive(Default)]
struct MemberExpansion {
    zero_arg: Vec<CallExpr>,
    with_args: Vec<CallExpr>,
    skipped_receiver: bool,
    skipped_signatures: usize,
}

/// Widen every call in `calls`.
///
/// Calls sharing both receiver and signature are widened once.
#[tracing::instrument(level = "debug", skip_all, fields(count = calls.len()))]
pub fn expand_members(
    calls: &[CallExpr],
    pool: &TypePool,
    interner: &StringInterner,
    parallel: bool,
) -> Widened {
    let mut pairs = FxHashSet::default();
    let unique: Vec<&CallExpr> = calls
        .iter()
        .filter(|&call| pairs.insert((call.receiver.as_deref(), call.sig)))
        .collect();

    let widen = |call: &&CallExpr| widen_call(call, pool, interner);
    let expansions: Vec<MemberExpansion> = if parallel {
        unique.par_iter().map(widen).collect()
    } else {
        unique.iter().map(widen).collect()
    };

    let printer = Printer::new(pool, interner);
    let mut seen = FxHashSet::default();
    let mut widened = Widened::default();
    for expansion in expansions {
        if expansion.skipped_receiver {
            widened.skipped_receivers += 1;
        }
        widened.skipped_signatures += expansion.skipped_signatures;
        for call in expansion.zero_arg.into_iter().chain(expansion.with_args) {
            if seen.insert(printer.render_call(&call)) {
                widened.calls.push(call);
            }
        }
    }

    tracing::debug!(
        unique = unique.len(),
        widened = widened.calls.len(),
        skipped_receivers = widened.skipped_receivers,
        skipped_signatures = widened.skipped_signatures,
        "member widening complete"
    );
    widened
}

fn widen_call(call: &CallExpr, pool: &TypePool, interner: &StringInterner) -> MemberExpansion {
    let members = match candidate_members(call, pool) {
        Ok(members) => members,
        Err(err) => {
            tracing::debug!(%err, sig = ?call.sig, "skipping receiver");
            return MemberExpansion {
                skipped_receiver: true,
                ..MemberExpansion::default()
            };
        }
    };

    let mut expansion = MemberExpansion::default();
    for (id, sig) in members {
        if sig.params.is_empty() {
            match zero_arg_call(call, id, sig, pool) {
                Ok(widened) => expansion.zero_arg.push(widened),
                Err(err) => tracing::debug!(%err, "skipping zero-arg member"),
            }
        } else {
            match arg_call(call, id, sig, pool, interner) {
                Ok(widened) => expansion.with_args.push(widened),
                Err(err) => {
                    tracing::debug!(%err, "skipping member");
                    expansion.skipped_signatures += 1;
                }
            }
        }
    }
    expansion
}

/// Members reachable from the call's receiver type.
///
/// Receiver-less calls widen against the declaring type and keep only
/// static members, since there is no receiver to carry.
fn candidate_members<'p>(
    call: &CallExpr,
    pool: &'p TypePool,
) -> Result<Vec<(SigId, &'p Signature)>, ExpandError> {
    let (owner, statics_only) = match call.receiver.as_deref() {
        Some(receiver) => (pool.type_of(receiver)?, false),
        None => (pool.signature(call.sig)?.declaring, true),
    };
    let mut members = Vec::new();
    for id in pool.reachable_members(owner)? {
        let sig = pool.signature(id)?;
        if !statics_only || sig.is_static {
            members.push((id, sig));
        }
    }
    Ok(members)
}

/// `receiver.member()` for a zero-parameter member, carrying its type arguments.
pub fn zero_arg_call(
    call: &CallExpr,
    id: SigId,
    sig: &Signature,
    pool: &TypePool,
) -> Result<CallExpr, ExpandError> {
    let mut widened = pool.build_call(call.receiver.as_deref().cloned(), id, Vec::new())?;
    widened.type_args.clone_from(&sig.type_args);
    Ok(widened)
}

/// `receiver.member(var_0, ..)` with placeholders, canonicalized.
pub fn arg_call(
    call: &CallExpr,
    id: SigId,
    sig: &Signature,
    pool: &TypePool,
    interner: &StringInterner,
) -> Result<CallExpr, ExpandError> {
    let mut receiver = call.receiver.as_deref().cloned();
    let mut taken = TakenNames::default();
    if let Some(receiver) = receiver.as_mut() {
        taken.visit_expr_mut(receiver);
    }
    let args = placeholder_args(id, sig, pool, interner, &taken.0)?;
    let mut widened = pool.build_call(receiver, id, args)?;
    canonicalize_call(&mut widened, pool, interner);
    Ok(widened)
}

/// Variable and field names read by an expression.
#[derive(Default)]
struct TakenNames(FxHashSet<Name>);

impl VisitorMut for TakenNames {
    fn visit_var_mut(&mut self, var: &mut VarRef) {
        self.0.insert(var.name);
    }

    fn visit_field_mut(&mut self, field: &mut FieldRef) {
        walk_field_mut(self, field);
        self.0.insert(field.name);
    }
}

/// `var_{index}`, suffixed until it is outside `taken`.
fn placeholder_name(index: usize, taken: &FxHashSet<Name>, interner: &StringInterner) -> Name {
    let name = interner.intern(&format!("var_{index}"));
    if !taken.contains(&name) {
        return name;
    }
    (1..)
        .map(|suffix| interner.intern(&format!("var_{index}_{suffix}")))
        .find(|name| !taken.contains(name))
        .unwrap_or(name)
}

/// One placeholder read per parameter, typed to the parameter's erasure.
fn placeholder_args(
    id: SigId,
    sig: &Signature,
    pool: &TypePool,
    interner: &StringInterner,
    taken: &FxHashSet<Name>,
) -> Result<Vec<Expr>, ExpandError> {
    sig.params
        .iter()
        .enumerate()
        .map(|(index, &param)| {
            let ty = pool
                .placeholder_type(param)
                .ok_or(ExpandError::NoPlaceholder { sig: id, index, param })?;
            Ok(Expr::var(placeholder_name(index, taken, interner), ty))
        })
        .collect()
}

#[cfg(test)]
mod tests;
