use rr_core::ast::Ty;
use rr_core::catalog::{ActionCatalog, ActionDescriptor, HandlerId, HttpMethod};
use rr_core::error::Error;
use rr_resolve::resolve_action;

fn customer() -> HandlerId {
    HandlerId::new("CustomerController")
}

fn order() -> HandlerId {
    HandlerId::new("OrderController")
}

fn catalog() -> ActionCatalog {
    let mut builder = ActionCatalog::builder();
    builder
        .register(
            ActionDescriptor::new(customer(), "GetCustomer", "Customer/GetCustomer/{id}")
                .with_param("id", Ty::i32()),
        )
        .unwrap();
    builder
        .register(
            ActionDescriptor::new(customer(), "GetCustomer", "Customer/GetCustomerByName/{name}")
                .with_param("name", Ty::string()),
        )
        .unwrap();
    builder
        .register(
            ActionDescriptor::new(customer(), "GetCustomer", "Customer/{major}/GetCustomer/{minor}")
                .with_param("major", Ty::i32())
                .with_param("minor", Ty::i32()),
        )
        .unwrap();
    builder
        .register(
            ActionDescriptor::new(customer(), "GenerateCustomer", "Customer/GenerateCustomer")
                .with_http_method(HttpMethod::Put),
        )
        .unwrap();
    builder
        .register(
            ActionDescriptor::new(order(), "GetCustomer", "Order/GetCustomer/{id}")
                .with_param("id", Ty::i32()),
        )
        .unwrap();
    builder.finish()
}

#[test]
fn resolves_every_catalog_entry_by_its_own_signature() {
    let catalog = catalog();
    for action in catalog.iter() {
        let arg_types: Vec<Ty> = action.param_types().cloned().collect();
        let resolved = resolve_action(
            &catalog,
            &action.handler,
            action.method.as_str(),
            &arg_types,
        )
        .unwrap();
        assert_eq!(resolved, action);
    }
}

#[test]
fn discriminates_overloads_by_type_sequence() {
    let catalog = catalog();

    let by_id = resolve_action(&catalog, &customer(), "GetCustomer", &[Ty::i32()]).unwrap();
    assert_eq!(by_id.route_template, "Customer/GetCustomer/{id}");

    let by_name = resolve_action(&catalog, &customer(), "GetCustomer", &[Ty::string()]).unwrap();
    assert_eq!(by_name.route_template, "Customer/GetCustomerByName/{name}");

    let by_pair =
        resolve_action(&catalog, &customer(), "GetCustomer", &[Ty::i32(), Ty::i32()]).unwrap();
    assert_eq!(by_pair.route_template, "Customer/{major}/GetCustomer/{minor}");
}

#[test]
fn discriminates_handlers_sharing_a_method_name() {
    let catalog = catalog();
    let action = resolve_action(&catalog, &order(), "GetCustomer", &[Ty::i32()]).unwrap();
    assert_eq!(action.handler, order());
}

#[test]
fn unknown_method_is_route_not_found() {
    let catalog = catalog();
    let err = resolve_action(&catalog, &customer(), "DeleteCustomer", &[Ty::i32()]).unwrap_err();
    match err {
        Error::RouteNotFound(query) => {
            assert_eq!(query.to_string(), "CustomerController::DeleteCustomer(i32)");
        }
        other => panic!("expected RouteNotFound, found {:?}", other),
    }
}

#[test]
fn unknown_handler_is_route_not_found() {
    let catalog = catalog();
    let ghost = HandlerId::new("GhostController");
    let err = resolve_action(&catalog, &ghost, "GetCustomer", &[Ty::i32()]).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound(_)));
}

#[test]
fn mismatched_argument_types_are_route_not_found() {
    let catalog = catalog();
    let err = resolve_action(&catalog, &customer(), "GenerateCustomer", &[Ty::i32()]).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound(_)));

    let err = resolve_action(&catalog, &customer(), "GetCustomer", &[Ty::i64()]).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound(_)));
}

#[test]
fn method_name_match_is_case_sensitive() {
    let catalog = catalog();
    let err = resolve_action(&catalog, &customer(), "getcustomer", &[Ty::i32()]).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound(_)));
}

#[test]
fn duplicate_registrations_resolve_to_nothing() {
    // Assembled without the builder, which would have rejected the duplicate.
    let duplicate = ActionDescriptor::new(customer(), "GetCustomer", "Customer/GetCustomer/{id}")
        .with_param("id", Ty::i32());
    let catalog = ActionCatalog::from_actions(vec![duplicate.clone(), duplicate]);

    let err = resolve_action(&catalog, &customer(), "GetCustomer", &[Ty::i32()]).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound(_)));
}
