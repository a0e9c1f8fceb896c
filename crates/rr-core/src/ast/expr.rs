use serde::{Deserialize, Serialize};

use crate::ast::{Ident, Ty, Value, ValueStruct};

pub type BExpr = Box<Expr>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
    And,
    Or,
}

impl BinOpKind {
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinOpKind::Gt
                | BinOpKind::Ge
                | BinOpKind::Lt
                | BinOpKind::Le
                | BinOpKind::Eq
                | BinOpKind::Ne
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinOpKind::And | BinOpKind::Or)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UnOpKind {
    Neg,
    Not,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExprBinOp {
    pub kind: BinOpKind,
    pub lhs: BExpr,
    pub rhs: BExpr,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExprUnOp {
    pub kind: UnOpKind,
    pub operand: BExpr,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExprSelect {
    pub obj: BExpr,
    pub field: Ident,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Value(Value),
    BinOp(ExprBinOp),
    UnOp(ExprUnOp),
    Select(ExprSelect),
    Paren(BExpr),
}

/// A symbolic expression together with its static type.
///
/// The static type is what overload resolution compares against an action's
/// formal parameter types; the evaluator never consults it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Expr {
    pub ty: Ty,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(ty: Ty, kind: ExprKind) -> Self {
        Self { ty, kind }
    }

    pub fn value(ty: Ty, value: Value) -> Self {
        Self::new(ty, ExprKind::Value(value))
    }

    pub fn int(v: i32) -> Self {
        Self::value(Ty::i32(), Value::int(v as i64))
    }

    pub fn int64(v: i64) -> Self {
        Self::value(Ty::i64(), Value::int(v))
    }

    pub fn decimal(v: f64) -> Self {
        Self::value(Ty::f64(), Value::decimal(v))
    }

    pub fn bool(v: bool) -> Self {
        Self::value(Ty::bool(), Value::bool(v))
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::value(Ty::string(), Value::string(v))
    }

    pub fn structure(v: ValueStruct) -> Self {
        let ty = Ty::Named(v.name.clone());
        Self::value(ty, Value::structure(v))
    }

    pub fn unit() -> Self {
        Self::value(Ty::unit(), Value::unit())
    }

    /// Comparison and logical operators type as `bool`; arithmetic keeps the
    /// left operand's type.
    pub fn bin_op(kind: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        let ty = if kind.is_comparison() || kind.is_logical() {
            Ty::bool()
        } else {
            lhs.ty.clone()
        };
        Self::new(
            ty,
            ExprKind::BinOp(ExprBinOp {
                kind,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }),
        )
    }

    pub fn un_op(kind: UnOpKind, operand: Expr) -> Self {
        let ty = match kind {
            UnOpKind::Neg => operand.ty.clone(),
            UnOpKind::Not => Ty::bool(),
        };
        Self::new(
            ty,
            ExprKind::UnOp(ExprUnOp {
                kind,
                operand: Box::new(operand),
            }),
        )
    }

    /// The static type of a member access is the field's declared type; it is
    /// not derivable from the object expression alone.
    pub fn select(obj: Expr, field: impl Into<Ident>, field_ty: Ty) -> Self {
        Self::new(
            field_ty,
            ExprKind::Select(ExprSelect {
                obj: Box::new(obj),
                field: field.into(),
            }),
        )
    }

    pub fn paren(inner: Expr) -> Self {
        let ty = inner.ty.clone();
        Self::new(ty, ExprKind::Paren(Box::new(inner)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_keeps_operand_type() {
        let expr = Expr::bin_op(BinOpKind::Add, Expr::int(2), Expr::int(3));
        assert_eq!(expr.ty, Ty::i32());
    }

    #[test]
    fn comparison_types_as_bool() {
        let expr = Expr::bin_op(BinOpKind::Lt, Expr::int64(2), Expr::int64(3));
        assert_eq!(expr.ty, Ty::bool());
    }

    #[test]
    fn select_carries_field_type() {
        let customer = ValueStruct::new("Customer", vec![]);
        let expr = Expr::select(Expr::structure(customer), "id", Ty::i32());
        assert_eq!(expr.ty, Ty::i32());
    }

    #[test]
    fn paren_is_transparent() {
        let expr = Expr::paren(Expr::string("abc"));
        assert_eq!(expr.ty, Ty::string());
    }
}
