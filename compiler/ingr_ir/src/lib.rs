//! Ingredient IR - expression trees for call-site expansion.
//!
//! This crate contains the data structures shared by the type pool and the
//! expansion passes:
//! - Names for interned identifiers
//! - `Idx` / `SigId` handles into the type pool
//! - The owned expression tree (`Expr`, `CallExpr`, `VarRef`, `FieldRef`)
//! - Call sites with a detached copy of their parent expression
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → Idx(u32)
//! - **Own Everything**: each node owns its children, no parent pointers.
//!   Syntactic context travels as an explicit `RenderContext` tag.
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.

mod expr;
mod interner;
mod name;
mod site;
mod type_id;
pub mod visitor;

pub use expr::{CallExpr, Expr, FieldRef, LitValue, Literal, VarRef};
pub use interner::StringInterner;
pub use name::Name;
pub use site::{CallSite, RenderContext};
pub use type_id::{Idx, SigId};
