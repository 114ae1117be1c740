//! Mutable expression visitor.
//!
//! Default implementations call `walk_*` functions that traverse children
//! left to right, depth first: a call's receiver before its arguments, a
//! field's target before the field itself. Override `visit_*` methods to
//! act on specific nodes.
//!
//! # Example
//!
//! ```text
//! struct CollectVars(Vec<Name>);
//!
//! impl VisitorMut for CollectVars {
//!     fn visit_var_mut(&mut self, var: &mut VarRef) {
//!         self.0.push(var.name);
//!     }
//! }
//! ```

use crate::{CallExpr, Expr, FieldRef, VarRef};

pub trait VisitorMut {
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        walk_expr_mut(self, expr);
    }

    fn visit_call_mut(&mut self, call: &mut CallExpr) {
        walk_call_mut(self, call);
    }

    /// Visit a field read. Override must call `walk_field_mut` to reach the target.
    fn visit_field_mut(&mut self, field: &mut FieldRef) {
        walk_field_mut(self, field);
    }

    fn visit_var_mut(&mut self, _var: &mut VarRef) {}
}

pub fn walk_expr_mut<V: VisitorMut + ?Sized>(visitor: &mut V, expr: &mut Expr) {
    match expr {
        Expr::Literal(_) => {}
        Expr::Var(var) => visitor.visit_var_mut(var),
        Expr::Field(field) => visitor.visit_field_mut(field),
        Expr::Call(call) => visitor.visit_call_mut(call),
        Expr::Not(operand) => visitor.visit_expr_mut(operand),
    }
}

pub fn walk_call_mut<V: VisitorMut + ?Sized>(visitor: &mut V, call: &mut CallExpr) {
    if let Some(receiver) = call.receiver.as_deref_mut() {
        visitor.visit_expr_mut(receiver);
    }
    for arg in &mut call.args {
        visitor.visit_expr_mut(arg);
    }
}

pub fn walk_field_mut<V: VisitorMut + ?Sized>(visitor: &mut V, field: &mut FieldRef) {
    if let Some(target) = field.target.as_deref_mut() {
        visitor.visit_expr_mut(target);
    }
}
