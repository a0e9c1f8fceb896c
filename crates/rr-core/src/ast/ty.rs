use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::ast::Ident;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeInt {
    I32,
    I64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecimalType {
    F64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypePrimitive {
    Int(TypeInt),
    Decimal(DecimalType),
    Bool,
    Char,
    String,
}

impl TypePrimitive {
    pub fn i32() -> TypePrimitive {
        TypePrimitive::Int(TypeInt::I32)
    }
    pub fn i64() -> TypePrimitive {
        TypePrimitive::Int(TypeInt::I64)
    }
    pub fn f64() -> TypePrimitive {
        TypePrimitive::Decimal(DecimalType::F64)
    }
}

/// Static type of a formal parameter or argument expression.
///
/// Overloads are disambiguated by element-wise equality of `Ty` sequences,
/// so two parameter lists describe the same overload iff they compare equal
/// position by position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ty {
    Primitive(TypePrimitive),
    /// A nominal type, e.g. the struct type of a composite argument.
    Named(Ident),
    Unit,
}

impl Ty {
    pub fn i32() -> Ty {
        Ty::Primitive(TypePrimitive::i32())
    }
    pub fn i64() -> Ty {
        Ty::Primitive(TypePrimitive::i64())
    }
    pub fn f64() -> Ty {
        Ty::Primitive(TypePrimitive::f64())
    }
    pub fn bool() -> Ty {
        Ty::Primitive(TypePrimitive::Bool)
    }
    pub fn char() -> Ty {
        Ty::Primitive(TypePrimitive::Char)
    }
    pub fn string() -> Ty {
        Ty::Primitive(TypePrimitive::String)
    }
    pub fn named(name: impl Into<Ident>) -> Ty {
        Ty::Named(name.into())
    }
    pub fn unit() -> Ty {
        Ty::Unit
    }
}

impl Display for Ty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Ty::Primitive(TypePrimitive::Int(TypeInt::I32)) => write!(f, "i32"),
            Ty::Primitive(TypePrimitive::Int(TypeInt::I64)) => write!(f, "i64"),
            Ty::Primitive(TypePrimitive::Decimal(DecimalType::F64)) => write!(f, "f64"),
            Ty::Primitive(TypePrimitive::Bool) => write!(f, "bool"),
            Ty::Primitive(TypePrimitive::Char) => write!(f, "char"),
            Ty::Primitive(TypePrimitive::String) => write!(f, "string"),
            Ty::Named(name) => write!(f, "{}", name),
            Ty::Unit => write!(f, "()"),
        }
    }
}
