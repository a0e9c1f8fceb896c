use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::ast::Ident;

/// wrap struct declare with derive Debug, Clone, Serialize, Deserialize,
/// PartialEq, Eq, Hash, PartialOrd, Ord
macro_rules! plain_value {
    ($(#[$attr:meta])* $name:ident: $ty:ty) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            pub value: $ty,
        }
        impl $name {
            pub fn new(v: $ty) -> Self {
                Self { value: v }
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }
    };
}

plain_value! {
    ValueInt: i64
}
plain_value! {
    ValueBool: bool
}
plain_value! {
    ValueChar: char
}
plain_value! {
    ValueString: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueDecimal {
    pub value: f64,
}

impl PartialEq for ValueDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value.total_cmp(&other.value) == std::cmp::Ordering::Equal
    }
}

impl Eq for ValueDecimal {}
impl PartialOrd for ValueDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.value.total_cmp(&other.value))
    }
}
impl Ord for ValueDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.total_cmp(&other.value)
    }
}
impl Hash for ValueDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}
impl ValueDecimal {
    pub fn new(v: f64) -> Self {
        Self { value: v }
    }
}
impl Display for ValueDecimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ValueUnit;

impl Display for ValueUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "()")
    }
}

/// One named field of a struct value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueField {
    pub name: Ident,
    pub value: Value,
}

impl ValueField {
    pub fn new(name: impl Into<Ident>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named struct value with ordered fields, looked up by name on member
/// access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueStruct {
    pub name: Ident,
    pub fields: Vec<ValueField>,
}

impl ValueStruct {
    pub fn new(name: impl Into<Ident>, fields: Vec<ValueField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name.as_str() == name)
            .map(|field| &field.value)
    }
}

impl Display for ValueStruct {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {{ .. }}", self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Int(ValueInt),
    Bool(ValueBool),
    Decimal(ValueDecimal),
    Char(ValueChar),
    String(ValueString),
    Struct(ValueStruct),
    Unit(ValueUnit),
}

impl Value {
    pub fn int(i: i64) -> Value {
        Value::Int(ValueInt::new(i))
    }
    pub fn bool(b: bool) -> Value {
        Value::Bool(ValueBool::new(b))
    }
    pub fn decimal(d: f64) -> Value {
        Value::Decimal(ValueDecimal::new(d))
    }
    pub fn char(c: char) -> Value {
        Value::Char(ValueChar::new(c))
    }
    pub fn string(s: impl Into<String>) -> Value {
        Value::String(ValueString::new(s.into()))
    }
    pub fn structure(s: ValueStruct) -> Value {
        Value::Struct(s)
    }
    pub fn unit() -> Value {
        Value::Unit(ValueUnit)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => Display::fmt(v, f),
            Value::Bool(v) => Display::fmt(v, f),
            Value::Decimal(v) => Display::fmt(v, f),
            Value::Char(v) => Display::fmt(v, f),
            Value::String(v) => Display::fmt(v, f),
            Value::Struct(v) => Display::fmt(v, f),
            Value::Unit(v) => Display::fmt(v, f),
        }
    }
}
