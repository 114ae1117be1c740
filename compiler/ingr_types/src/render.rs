//! Deterministic expression rendering.
//!
//! The rendered text is the deduplication key for generated candidates, so
//! it depends only on tree structure: never on identity or allocation order.

use ingr_ir::{CallExpr, Expr, FieldRef, Idx, LitValue, RenderContext, StringInterner};

use crate::TypePool;

/// Renders expressions as Java-like source text.
#[derive(Copy, Clone)]
pub struct Printer<'a> {
    pool: &'a TypePool,
    interner: &'a StringInterner,
}

impl<'a> Printer<'a> {
    pub fn new(pool: &'a TypePool, interner: &'a StringInterner) -> Self {
        Printer { pool, interner }
    }

    /// Render an expression with no enclosing context.
    pub fn render(&self, expr: &Expr) -> String {
        self.render_in(expr, RenderContext::Top)
    }

    pub fn render_call(&self, call: &CallExpr) -> String {
        let mut out = String::new();
        self.emit_call(call, &mut out);
        out
    }

    /// Render an expression as it prints inside `ctx`.
    ///
    /// A negation placed under another negation or used as a receiver is
    /// parenthesized.
    pub fn render_in(&self, expr: &Expr, ctx: RenderContext) -> String {
        let mut out = String::new();
        self.emit(expr, ctx, &mut out);
        out
    }

    fn emit(&self, expr: &Expr, ctx: RenderContext, out: &mut String) {
        match expr {
            Expr::Literal(lit) => self.emit_literal(lit.value, out),
            Expr::Var(var) => out.push_str(self.interner.lookup(var.name)),
            Expr::Field(field) => self.emit_field(field, out),
            Expr::Call(call) => self.emit_call(call, out),
            Expr::Not(operand) => {
                let parens = matches!(
                    ctx,
                    RenderContext::NegationOperand | RenderContext::Receiver
                );
                if parens {
                    out.push('(');
                }
                out.push('!');
                self.emit(operand, RenderContext::NegationOperand, out);
                if parens {
                    out.push(')');
                }
            }
        }
    }

    fn emit_literal(&self, value: LitValue, out: &mut String) {
        match value {
            LitValue::Int(v) => out.push_str(&v.to_string()),
            LitValue::Long(v) => out.push_str(&format!("{v}L")),
            LitValue::Double(bits) => out.push_str(&format!("{:?}", f64::from_bits(bits))),
            LitValue::Bool(v) => out.push_str(if v { "true" } else { "false" }),
            LitValue::Char(c) => {
                out.push('\'');
                push_java_escaped(c, out);
                out.push('\'');
            }
            LitValue::Str(s) => {
                out.push('"');
                for c in self.interner.lookup(s).chars() {
                    push_java_escaped(c, out);
                }
                out.push('"');
            }
            LitValue::Null => out.push_str("null"),
        }
    }

    fn emit_field(&self, field: &FieldRef, out: &mut String) {
        match (&field.target, field.declaring) {
            (Some(target), _) => {
                self.emit(target, RenderContext::Receiver, out);
                out.push('.');
            }
            (None, Some(declaring)) if field.is_static => {
                self.emit_type(declaring, out);
                out.push('.');
            }
            (None, Some(_)) => out.push_str("this."),
            (None, None) => {}
        }
        out.push_str(self.interner.lookup(field.name));
    }

    fn emit_call(&self, call: &CallExpr, out: &mut String) {
        let signature = self.pool.signature(call.sig).ok();

        match (&call.receiver, signature) {
            (Some(receiver), _) => {
                self.emit(receiver, RenderContext::Receiver, out);
                out.push('.');
            }
            (None, Some(sig)) if self.pool.simple_name(sig.declaring, self.interner).is_ok() => {
                self.emit_type(sig.declaring, out);
                out.push('.');
            }
            (None, _) => {}
        }

        if !call.type_args.is_empty() {
            out.push('<');
            for (i, ty) in call.type_args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.emit_type(*ty, out);
            }
            out.push('>');
        }

        match signature {
            Some(sig) => out.push_str(self.interner.lookup(sig.name)),
            None => out.push_str("<unknown>"),
        }

        out.push('(');
        for (i, arg) in call.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.emit(arg, RenderContext::Argument, out);
        }
        out.push(')');
    }

    fn emit_type(&self, ty: Idx, out: &mut String) {
        match self.pool.simple_name(ty, self.interner) {
            Ok(name) => out.push_str(&name),
            Err(_) => out.push_str("<unresolved>"),
        }
    }
}

/// Java source escape for one character inside a char or string literal.
///
/// Anything outside printable ASCII becomes `\uXXXX`, one escape per UTF-16
/// code unit.
fn push_java_escaped(c: char, out: &mut String) {
    match c {
        '\u{8}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{c}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        '"' => out.push_str("\\\""),
        '\'' => out.push_str("\\'"),
        '\\' => out.push_str("\\\\"),
        ' '..='~' => out.push(c),
        _ => {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
}
