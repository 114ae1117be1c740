//! Canonical renaming of variable references.
//!
//! Rewrites every non-static variable and field read inside one expression
//! to `_<TypeSimpleName>_<n>`, where `n` counts distinct original names in
//! left-to-right, depth-first read order. Two expressions that differ only
//! in variable naming render identically afterwards.
//!
//! The original → canonical mapping lives for one traversal only. It is
//! never shared between expressions or between parallel tasks.

use ingr_ir::visitor::{walk_field_mut, VisitorMut};
use ingr_ir::{CallExpr, Expr, FieldRef, Idx, Name, StringInterner, VarRef};
use ingr_types::TypePool;
use rustc_hash::FxHashMap;

/// Canonicalize all variable references inside `expr` in place.
pub fn canonicalize(expr: &mut Expr, pool: &TypePool, interner: &StringInterner) {
    Renamer::new(pool, interner).visit_expr_mut(expr);
}

/// Canonicalize all variable references inside `call` in place.
pub fn canonicalize_call(call: &mut CallExpr, pool: &TypePool, interner: &StringInterner) {
    Renamer::new(pool, interner).visit_call_mut(call);
}

struct Renamer<'a> {
    pool: &'a TypePool,
    interner: &'a StringInterner,
    /// Original name → canonical name, for this traversal only.
    mapping: FxHashMap<Name, Name>,
    /// Number of distinct original names seen so far.
    seen: usize,
}

impl<'a> Renamer<'a> {
    fn new(pool: &'a TypePool, interner: &'a StringInterner) -> Self {
        Renamer {
            pool,
            interner,
            mapping: FxHashMap::default(),
            seen: 0,
        }
    }

    fn rename(&mut self, original: Name, ty: Idx) -> Name {
        if let Some(&canonical) = self.mapping.get(&original) {
            return canonical;
        }
        // Wildcard and unresolved types have no canonical form.
        let canonical = match self.pool.simple_name(ty, self.interner) {
            Ok(simple) if !simple.contains('?') => {
                self.interner.intern(&format!("_{simple}_{}", self.seen))
            }
            _ => original,
        };
        self.mapping.insert(original, canonical);
        self.seen += 1;
        canonical
    }
}

impl VisitorMut for Renamer<'_> {
    fn visit_var_mut(&mut self, var: &mut VarRef) {
        if !var.is_static {
            var.name = self.rename(var.name, var.ty);
        }
    }

    fn visit_field_mut(&mut self, field: &mut FieldRef) {
        walk_field_mut(self, field);
        if !field.is_static {
            field.name = self.rename(field.name, field.ty);
            // Canonical names are not members of any real type.
            field.declaring = None;
        }
    }
}
