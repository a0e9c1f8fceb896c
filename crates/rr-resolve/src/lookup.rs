use itertools::Itertools;

use rr_core::ast::Ty;
use rr_core::catalog::{ActionCatalog, ActionDescriptor, ActionQuery, HandlerId, Invocation};
use rr_core::error::{Error, Result};
use rr_core::warn;

use crate::path::build_path;

/// Locate the unique catalog action matching a (handler, method, argument
/// type sequence) triple.
///
/// Overloads are disambiguated by element-wise equality of the parameter
/// type sequence. Zero survivors fail; so does more than one: an ambiguous
/// catalog is a registration bug and must never be routed through silently.
pub fn resolve_action<'a>(
    catalog: &'a ActionCatalog,
    target: &HandlerId,
    method: &str,
    arg_types: &[Ty],
) -> Result<&'a ActionDescriptor> {
    let candidates = catalog
        .iter()
        .filter(|action| action.handler == *target)
        .filter(|action| action.method.as_str() == method)
        .filter(|action| action.param_types().eq(arg_types));
    match candidates.exactly_one() {
        Ok(action) => Ok(action),
        Err(survivors) => {
            let query = ActionQuery::new(target.clone(), method, arg_types.to_vec());
            let count = survivors.count();
            if count > 1 {
                warn!("ambiguous catalog match for {}: {} candidates", query, count);
            }
            Err(Error::RouteNotFound(query))
        }
    }
}

/// Resolve an invocation to its action and render the concrete path in one
/// step: the typical composition callers want.
pub fn resolve_route(catalog: &ActionCatalog, invocation: &Invocation) -> Result<String> {
    let arg_types = invocation.arg_types();
    let action = resolve_action(
        catalog,
        &invocation.target,
        invocation.method.as_str(),
        &arg_types,
    )?;
    build_path(action, &invocation.args)
}
