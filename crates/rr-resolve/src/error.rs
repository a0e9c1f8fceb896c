use rr_core::error::Error;

/// Create a simple evaluation error
pub fn evaluation_error(message: impl Into<String>) -> Error {
    Error::Evaluation(message.into())
}

/// Wrap an evaluation failure with the route parameter it was evaluated for
pub fn placeholder_error(name: impl Into<String>, cause: Error) -> Error {
    Error::PlaceholderEvaluation {
        name: name.into(),
        source: Box::new(cause),
    }
}

// Convenience macros for generating evaluation errors

/// Macro to return early with an evaluation error
#[macro_export]
macro_rules! eval_bail {
    ($($arg:tt)*) => {
        return Err($crate::error::evaluation_error(format!($($arg)*)))
    };
}

/// Macro to ensure a condition is true, or return an evaluation error
#[macro_export]
macro_rules! eval_ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::eval_bail!($($arg)*);
        }
    };
}
