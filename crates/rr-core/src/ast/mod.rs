//! Symbolic expressions are trees, so Box<T> is fine

mod expr;
mod ident;
mod ty;
mod value;

pub use expr::*;
pub use ident::*;
pub use ty::*;
pub use value::*;
