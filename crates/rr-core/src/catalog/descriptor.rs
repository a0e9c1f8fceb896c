use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::ast::{Ident, Ty};
use crate::catalog::ActionQuery;

/// Identity of the handler type that owns an action.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From,
)]
pub struct HandlerId(pub String);

impl HandlerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the identity from a Rust type, keeping only the last path
    /// segment of `type_name`.
    pub fn of<T: ?Sized>() -> Self {
        let name = std::any::type_name::<T>();
        Self::new(name.rsplit("::").next().unwrap_or(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for HandlerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Display,
)]
pub enum HttpMethod {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
    #[display("PATCH")]
    Patch,
}

/// One formal parameter of an action, name and type positionally aligned
/// with the invocation's argument expressions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ActionParam {
    pub name: Ident,
    pub ty: Ty,
}

impl ActionParam {
    pub fn new(name: impl Into<Ident>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One registered handler method and the route template it serves.
///
/// Within a catalog the tuple (handler, method, parameter type sequence) is
/// unique; `CatalogBuilder` enforces this at registration time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ActionDescriptor {
    pub handler: HandlerId,
    pub method: Ident,
    pub http_method: HttpMethod,
    pub params: Vec<ActionParam>,
    pub route_template: String,
}

impl ActionDescriptor {
    pub fn new(
        handler: impl Into<HandlerId>,
        method: impl Into<Ident>,
        route_template: impl Into<String>,
    ) -> Self {
        Self {
            handler: handler.into(),
            method: method.into(),
            http_method: HttpMethod::Get,
            params: Vec::new(),
            route_template: route_template.into(),
        }
    }

    pub fn with_http_method(mut self, http_method: HttpMethod) -> Self {
        self.http_method = http_method;
        self
    }

    pub fn with_param(mut self, name: impl Into<Ident>, ty: Ty) -> Self {
        self.params.push(ActionParam::new(name, ty));
        self
    }

    /// The ordered parameter type sequence, in declaration order.
    pub fn param_types(&self) -> impl Iterator<Item = &Ty> {
        self.params.iter().map(|param| &param.ty)
    }

    pub fn param_names(&self) -> impl Iterator<Item = &Ident> {
        self.params.iter().map(|param| &param.name)
    }

    /// Diagnostic identity of this action, as a lookup for it would render.
    pub fn query(&self) -> ActionQuery {
        ActionQuery::new(
            self.handler.clone(),
            self.method.clone(),
            self.param_types().cloned().collect(),
        )
    }
}
