//! Call sites with explicit syntactic context.

use crate::{CallExpr, Expr};

/// Immediate syntactic context an expression is rendered in.
///
/// Replaces a parent back-pointer: generators pass the tag down instead of
/// walking up the tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderContext {
    /// Statement or other context with no enclosing expression.
    #[default]
    Top,
    /// Operand of a logical negation.
    NegationOperand,
    /// Receiver of a call or target of a field access.
    Receiver,
    /// Argument of a call.
    Argument,
}

/// An original call together with a detached copy of its parent expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub call: CallExpr,
    /// Immediate parent expression, if the call is nested inside one.
    pub parent: Option<Box<Expr>>,
}

impl CallSite {
    /// A call with no enclosing expression.
    pub fn new(call: CallExpr) -> Self {
        CallSite { call, parent: None }
    }

    pub fn with_parent(call: CallExpr, parent: Expr) -> Self {
        CallSite {
            call,
            parent: Some(Box::new(parent)),
        }
    }

    /// Context tag for the slot this call occupies in its parent.
    pub fn parent_context(&self) -> RenderContext {
        let Some(parent) = self.parent.as_deref() else {
            return RenderContext::Top;
        };
        match parent {
            Expr::Not(operand) if is_this_call(operand, &self.call) => {
                RenderContext::NegationOperand
            }
            Expr::Call(outer)
                if outer
                    .receiver
                    .as_deref()
                    .is_some_and(|recv| is_this_call(recv, &self.call)) =>
            {
                RenderContext::Receiver
            }
            Expr::Field(field)
                if field
                    .target
                    .as_deref()
                    .is_some_and(|target| is_this_call(target, &self.call)) =>
            {
                RenderContext::Receiver
            }
            _ => RenderContext::Argument,
        }
    }
}

fn is_this_call(expr: &Expr, call: &CallExpr) -> bool {
    expr.as_call() == Some(call)
}
