use rr_core::ast::{BinOpKind, Expr, ExprKind, Ident, UnOpKind, Value};
use rr_core::Result;

use crate::error::evaluation_error;
use crate::{eval_bail, eval_ensure};

/// Evaluate a closed-form symbolic expression to a concrete value.
///
/// Only the supported node set evaluates; anything else fails explicitly
/// rather than partially. There is no external context to consult: argument
/// expressions must be evaluable standalone.
pub fn evaluate(expr: &Expr) -> Result<Value> {
    match &expr.kind {
        ExprKind::Value(value) => Ok(value.clone()),
        ExprKind::Paren(inner) => evaluate(inner),
        ExprKind::UnOp(un_op) => {
            let operand = evaluate(&un_op.operand)?;
            evaluate_unary(un_op.kind, operand)
        }
        ExprKind::BinOp(bin_op) => {
            let lhs = evaluate(&bin_op.lhs)?;
            let rhs = evaluate(&bin_op.rhs)?;
            evaluate_binop(bin_op.kind, lhs, rhs)
        }
        ExprKind::Select(select) => {
            let obj = evaluate(&select.obj)?;
            select_field(obj, &select.field)
        }
    }
}

fn evaluate_binop(op: BinOpKind, lhs: Value, rhs: Value) -> Result<Value> {
    match op {
        BinOpKind::Add => binop_add(lhs, rhs),
        BinOpKind::Sub => binop_sub(lhs, rhs),
        BinOpKind::Mul => binop_mul(lhs, rhs),
        BinOpKind::Div => binop_div(lhs, rhs),
        BinOpKind::Mod => binop_mod(lhs, rhs),
        BinOpKind::Gt | BinOpKind::Ge | BinOpKind::Lt | BinOpKind::Le => {
            binop_ordering(op, lhs, rhs)
        }
        BinOpKind::Eq | BinOpKind::Ne => binop_equality(op, lhs, rhs),
        BinOpKind::Or | BinOpKind::And => binop_logical(op, lhs, rhs),
    }
}

fn binop_add(lhs: Value, rhs: Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => Ok(Value::int(l.value + r.value)),
        (Value::Decimal(l), Value::Decimal(r)) => Ok(Value::decimal(l.value + r.value)),
        (Value::String(l), Value::String(r)) => {
            Ok(Value::string(format!("{}{}", l.value, r.value)))
        }
        other => Err(evaluation_error(format!(
            "unsupported operands for '+': {:?}",
            other
        ))),
    }
}

fn binop_sub(lhs: Value, rhs: Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => Ok(Value::int(l.value - r.value)),
        (Value::Decimal(l), Value::Decimal(r)) => Ok(Value::decimal(l.value - r.value)),
        other => Err(evaluation_error(format!(
            "unsupported operands for '-': {:?}",
            other
        ))),
    }
}

fn binop_mul(lhs: Value, rhs: Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => Ok(Value::int(l.value * r.value)),
        (Value::Decimal(l), Value::Decimal(r)) => Ok(Value::decimal(l.value * r.value)),
        other => Err(evaluation_error(format!(
            "unsupported operands for '*': {:?}",
            other
        ))),
    }
}

fn binop_div(lhs: Value, rhs: Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => {
            eval_ensure!(r.value != 0, "division by zero");
            if l.value % r.value == 0 {
                Ok(Value::int(l.value / r.value))
            } else {
                Ok(Value::decimal(l.value as f64 / r.value as f64))
            }
        }
        (Value::Decimal(l), Value::Decimal(r)) => {
            eval_ensure!(r.value != 0.0, "division by zero");
            Ok(Value::decimal(l.value / r.value))
        }
        other => Err(evaluation_error(format!(
            "unsupported operands for '/': {:?}",
            other
        ))),
    }
}

fn binop_mod(lhs: Value, rhs: Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => {
            eval_ensure!(r.value != 0, "division by zero");
            Ok(Value::int(l.value % r.value))
        }
        other => Err(evaluation_error(format!(
            "unsupported operands for '%': {:?}",
            other
        ))),
    }
}

fn binop_ordering(op: BinOpKind, lhs: Value, rhs: Value) -> Result<Value> {
    use std::cmp::Ordering;
    let ordering = match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => l.value.cmp(&r.value),
        (Value::Decimal(l), Value::Decimal(r)) => l.value.total_cmp(&r.value),
        (Value::String(l), Value::String(r)) => l.value.cmp(&r.value),
        (Value::Char(l), Value::Char(r)) => l.value.cmp(&r.value),
        other => {
            return Err(evaluation_error(format!(
                "unsupported operands for ordering comparison: {:?}",
                other
            )))
        }
    };
    let result = match op {
        BinOpKind::Gt => ordering == Ordering::Greater,
        BinOpKind::Ge => ordering != Ordering::Less,
        BinOpKind::Lt => ordering == Ordering::Less,
        BinOpKind::Le => ordering != Ordering::Greater,
        _ => unreachable!(),
    };
    Ok(Value::bool(result))
}

fn binop_equality(op: BinOpKind, lhs: Value, rhs: Value) -> Result<Value> {
    let eq = lhs == rhs;
    let result = match op {
        BinOpKind::Eq => eq,
        BinOpKind::Ne => !eq,
        _ => unreachable!(),
    };
    Ok(Value::bool(result))
}

fn binop_logical(op: BinOpKind, lhs: Value, rhs: Value) -> Result<Value> {
    let (l, r) = match (lhs, rhs) {
        (Value::Bool(l), Value::Bool(r)) => (l.value, r.value),
        other => {
            return Err(evaluation_error(format!(
                "logical operators require booleans, found {:?}",
                other
            )))
        }
    };
    let result = match op {
        BinOpKind::Or => l || r,
        BinOpKind::And => l && r,
        _ => unreachable!(),
    };
    Ok(Value::bool(result))
}

fn evaluate_unary(op: UnOpKind, value: Value) -> Result<Value> {
    match op {
        UnOpKind::Neg => match value {
            Value::Int(v) => Ok(Value::int(-v.value)),
            Value::Decimal(v) => Ok(Value::decimal(-v.value)),
            other => eval_bail!("unsupported operand for negation: {:?}", other),
        },
        UnOpKind::Not => match value {
            Value::Bool(v) => Ok(Value::bool(!v.value)),
            other => eval_bail!("unsupported operand for logical not: {:?}", other),
        },
    }
}

fn select_field(obj: Value, field: &Ident) -> Result<Value> {
    match obj {
        Value::Struct(value) => value.field(field.as_str()).cloned().ok_or_else(|| {
            evaluation_error(format!("no field `{}` on `{}`", field, value.name))
        }),
        other => eval_bail!("member access `{}` on non-struct value: {:?}", field, other),
    }
}
