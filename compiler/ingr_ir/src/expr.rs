//! Expression tree.
//!
//! The tree is owned: every node owns its children and there are no parent
//! links, so `Clone` is a deep, parent-independent structural copy and the
//! derived `Eq`/`Hash` are structural.

use crate::{Idx, Name, SigId};

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Literal),
    /// Read of a local variable or parameter.
    Var(VarRef),
    /// Read of a field, optionally through a target expression.
    Field(FieldRef),
    Call(CallExpr),
    /// Logical negation `!operand`.
    Not(Box<Expr>),
}

impl Expr {
    /// Read of a non-static variable.
    pub fn var(name: Name, ty: Idx) -> Self {
        Expr::Var(VarRef {
            name,
            ty,
            is_static: false,
        })
    }

    pub fn literal(value: LitValue, ty: Idx) -> Self {
        Expr::Literal(Literal { value, ty })
    }

    /// Wrap in a logical negation.
    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, Expr::Not(_))
    }
}

impl From<CallExpr> for Expr {
    fn from(call: CallExpr) -> Self {
        Expr::Call(call)
    }
}

/// Literal value with its static type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: LitValue,
    pub ty: Idx,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LitValue {
    Int(i64),
    Long(i64),
    /// Stored as bits for Hash/Eq.
    Double(u64),
    Bool(bool),
    Char(char),
    Str(Name),
    Null,
}

impl LitValue {
    pub fn double(value: f64) -> Self {
        LitValue::Double(value.to_bits())
    }
}

/// Variable read.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VarRef {
    pub name: Name,
    /// Declared type of the variable.
    pub ty: Idx,
    pub is_static: bool,
}

/// Field read.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldRef {
    /// Explicit target (`target.name`); `None` for implicit `this` or static access.
    pub target: Option<Box<Expr>>,
    pub name: Name,
    /// Declared type of the field.
    pub ty: Idx,
    /// Type declaring the field, used to qualify target-less accesses.
    pub declaring: Option<Idx>,
    pub is_static: bool,
}

/// Method invocation.
///
/// `args.len()` always equals the signature's parameter count. The type
/// pool's `build_call` is the checked constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallExpr {
    /// `None` for static calls.
    pub receiver: Option<Box<Expr>>,
    pub sig: SigId,
    /// Explicit type arguments (`recv.<T>name()`).
    pub type_args: Vec<Idx>,
    pub args: Vec<Expr>,
}

impl CallExpr {
    /// Copy of this call with the argument list replaced.
    ///
    /// Callers must keep the argument count unchanged.
    pub fn with_args(&self, args: Vec<Expr>) -> Self {
        debug_assert_eq!(args.len(), self.args.len());
        CallExpr {
            receiver: self.receiver.clone(),
            sig: self.sig,
            type_args: self.type_args.clone(),
            args,
        }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}
