use std::result;

use thiserror::Error;

use crate::catalog::ActionQuery;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no route for {0}")]
    RouteNotFound(ActionQuery),
    #[error("route template references unknown parameter `{0}`")]
    UnmatchedPlaceholder(String),
    #[error("unable to evaluate parameter `{name}`")]
    PlaceholderEvaluation {
        name: String,
        #[source]
        source: Box<Error>,
    },
    #[error("evaluation error: {0}")]
    Evaluation(String),
    #[error("duplicate action registration for {0}")]
    DuplicateAction(ActionQuery),
    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}
