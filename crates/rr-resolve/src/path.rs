use std::collections::HashMap;
use std::str::Chars;

use tracing::debug;

use rr_core::ast::{Expr, Value};
use rr_core::bail;
use rr_core::catalog::ActionDescriptor;
use rr_core::error::{Error, Result};

use crate::error::{evaluation_error, placeholder_error};
use crate::eval::evaluate;

/// Substitute every `{name}` / `{name:constraint}` placeholder in the
/// action's route template with the evaluated value of the argument
/// expression bound to `name`.
///
/// Parameters are correlated with arguments by position, placeholders with
/// parameters by name: template order is independent of argument order. Each
/// parameter is evaluated at most once; repeated placeholders share the
/// rendering. Failure returns no partial path.
pub fn build_path(action: &ActionDescriptor, args: &[Expr]) -> Result<String> {
    if args.len() != action.params.len() {
        bail!(
            "expected {} arguments for {}, got {}",
            action.params.len(),
            action.query(),
            args.len()
        );
    }
    let bindings: HashMap<&str, &Expr> = action
        .params
        .iter()
        .zip(args)
        .map(|(param, arg)| (param.name.as_str(), arg))
        .collect();

    let mut rendered: HashMap<String, String> = HashMap::new();
    let mut out = String::with_capacity(action.route_template.len());
    let mut chars = action.route_template.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                let name = read_placeholder_name(&mut chars)?;
                let segment = match rendered.get(&name) {
                    Some(segment) => segment.clone(),
                    None => {
                        let expr = *bindings
                            .get(name.as_str())
                            .ok_or_else(|| Error::UnmatchedPlaceholder(name.clone()))?;
                        let value =
                            evaluate(expr).map_err(|err| placeholder_error(name.as_str(), err))?;
                        let segment = render_segment(&value)
                            .map_err(|err| placeholder_error(name.as_str(), err))?;
                        rendered.insert(name.clone(), segment.clone());
                        segment
                    }
                };
                out.push_str(&segment);
            }
            '}' => bail!(
                "unbalanced '}}' in route template `{}`",
                action.route_template
            ),
            other => out.push(other),
        }
    }
    debug!("built `{}` from template `{}`", out, action.route_template);
    Ok(out)
}

/// Read a placeholder body up to the closing brace. Everything from the
/// first `:` to the closing brace is an opaque constraint and is skipped.
fn read_placeholder_name(chars: &mut Chars<'_>) -> Result<String> {
    let mut name = String::new();
    let mut in_constraint = false;
    loop {
        match chars.next() {
            Some('}') => break,
            Some('{') => bail!("nested '{{' in route template placeholder"),
            Some(':') if !in_constraint => in_constraint = true,
            Some(other) => {
                if !in_constraint {
                    name.push(other);
                }
            }
            None => bail!("unterminated placeholder in route template"),
        }
    }
    if name.is_empty() {
        bail!("empty placeholder in route template");
    }
    Ok(name)
}

/// Canonical path-segment text of a value: the same stringification a
/// default to-string conversion produces for primitives. Composites have no
/// path-segment form.
fn render_segment(value: &Value) -> Result<String> {
    match value {
        Value::Int(v) => Ok(v.value.to_string()),
        Value::Decimal(v) => Ok(v.value.to_string()),
        Value::Bool(v) => Ok(v.value.to_string()),
        Value::Char(v) => Ok(v.value.to_string()),
        Value::String(v) => Ok(v.value.clone()),
        Value::Unit(_) => Ok(String::new()),
        Value::Struct(v) => Err(evaluation_error(format!(
            "cannot render struct `{}` as a path segment",
            v.name
        ))),
    }
}
