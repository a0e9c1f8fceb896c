use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::ast::{Expr, Ident, Ty};
use crate::catalog::HandlerId;

/// A symbolic method call against a handler type: the thing the resolver
/// turns into a concrete path. Built transiently per resolution, never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invocation {
    pub target: HandlerId,
    pub method: Ident,
    pub args: Vec<Expr>,
}

impl Invocation {
    pub fn new(target: impl Into<HandlerId>, method: impl Into<Ident>) -> Self {
        Self {
            target: target.into(),
            method: method.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: Expr) -> Self {
        self.args.push(arg);
        self
    }

    /// The ordered static type sequence of the argument expressions.
    pub fn arg_types(&self) -> Vec<Ty> {
        self.args.iter().map(|arg| arg.ty.clone()).collect()
    }

    pub fn query(&self) -> ActionQuery {
        ActionQuery::new(self.target.clone(), self.method.clone(), self.arg_types())
    }
}

/// Diagnostic identity of a lookup request, carried by lookup failures so
/// the caller can see what was asked for without re-running.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ActionQuery {
    pub target: HandlerId,
    pub method: Ident,
    pub arg_types: Vec<Ty>,
}

impl ActionQuery {
    pub fn new(target: impl Into<HandlerId>, method: impl Into<Ident>, arg_types: Vec<Ty>) -> Self {
        Self {
            target: target.into(),
            method: method.into(),
            arg_types,
        }
    }
}

impl Display for ActionQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}::{}({})",
            self.target,
            self.method,
            self.arg_types.iter().join(", ")
        )
    }
}
