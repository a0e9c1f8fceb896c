use pretty_assertions::assert_eq;

use rr_core::ast::{BinOpKind, Expr, Ty};
use rr_core::catalog::ActionDescriptor;
use rr_core::error::Error;
use rr_resolve::build_path;

fn get_customer() -> ActionDescriptor {
    ActionDescriptor::new(
        "CustomerController",
        "GetCustomer",
        "Customer/GetCustomer/{id}",
    )
    .with_param("id", Ty::i32())
}

#[test]
fn substitutes_an_evaluated_argument() {
    let args = [Expr::bin_op(BinOpKind::Add, Expr::int(2), Expr::int(3))];
    let path = build_path(&get_customer(), &args).unwrap();
    assert_eq!(path, "Customer/GetCustomer/5");
}

#[test]
fn leaves_literal_text_untouched() {
    let action = ActionDescriptor::new("ReportController", "Daily", "Report/v2/Daily-latest");
    assert_eq!(build_path(&action, &[]).unwrap(), "Report/v2/Daily-latest");
}

#[test]
fn placeholder_order_is_independent_of_argument_order() {
    let action = ActionDescriptor::new("SpanController", "Range", "Span/{end}/{start}")
        .with_param("start", Ty::i32())
        .with_param("end", Ty::i32());
    let args = [Expr::int(1), Expr::int(9)];
    assert_eq!(build_path(&action, &args).unwrap(), "Span/9/1");
}

#[test]
fn repeated_placeholders_share_one_value() {
    let action = ActionDescriptor::new("EchoController", "Echo", "Echo/{id}/twice/{id}")
        .with_param("id", Ty::i32());
    let args = [Expr::int(4)];
    assert_eq!(build_path(&action, &args).unwrap(), "Echo/4/twice/4");
}

#[test]
fn constraint_suffix_is_ignored() {
    let action = ActionDescriptor::new("CustomerController", "GetCustomer", "Customer/{id:int}")
        .with_param("id", Ty::i32());
    assert_eq!(build_path(&action, &[Expr::int(7)]).unwrap(), "Customer/7");
}

#[test]
fn string_arguments_render_verbatim() {
    let action = ActionDescriptor::new("CustomerController", "ByName", "Customer/ByName/{name}")
        .with_param("name", Ty::string());
    let args = [Expr::string("miller")];
    assert_eq!(build_path(&action, &args).unwrap(), "Customer/ByName/miller");
}

#[test]
fn unmatched_placeholder_names_the_offender() {
    let action =
        ActionDescriptor::new("ItemController", "GetItem", "Item/{itemId}").with_param("id", Ty::i32());
    let err = build_path(&action, &[Expr::int(1)]).unwrap_err();
    match err {
        Error::UnmatchedPlaceholder(name) => assert_eq!(name, "itemId"),
        other => panic!("expected UnmatchedPlaceholder, found {:?}", other),
    }
}

#[test]
fn unevaluable_argument_names_the_parameter() {
    // Member access on a non-struct value cannot be evaluated standalone.
    let action = get_customer();
    let args = [Expr::select(Expr::int(1), "id", Ty::i32())];
    let err = build_path(&action, &args).unwrap_err();
    match err {
        Error::PlaceholderEvaluation { name, source } => {
            assert_eq!(name, "id");
            assert!(matches!(*source, Error::Evaluation(_)));
        }
        other => panic!("expected PlaceholderEvaluation, found {:?}", other),
    }
}

#[test]
fn arity_mismatch_is_rejected() {
    let err = build_path(&get_customer(), &[]).unwrap_err();
    assert!(matches!(err, Error::Generic(_)));
}

#[test]
fn malformed_templates_are_rejected() {
    let unterminated = ActionDescriptor::new("BrokenController", "A", "Broken/{id")
        .with_param("id", Ty::i32());
    assert!(matches!(
        build_path(&unterminated, &[Expr::int(1)]).unwrap_err(),
        Error::Generic(_)
    ));

    let bare_close = ActionDescriptor::new("BrokenController", "B", "Broken/}/x");
    assert!(matches!(
        build_path(&bare_close, &[]).unwrap_err(),
        Error::Generic(_)
    ));

    let empty = ActionDescriptor::new("BrokenController", "C", "Broken/{}");
    assert!(matches!(
        build_path(&empty, &[]).unwrap_err(),
        Error::Generic(_)
    ));
}

#[test]
fn no_partial_path_escapes_a_failure() {
    // Second placeholder is unmatched; the first substituting fine must not
    // leak a half-built path.
    let action = ActionDescriptor::new("PairController", "Pair", "Pair/{a}/{missing}")
        .with_param("a", Ty::i32());
    let result = build_path(&action, &[Expr::int(1)]);
    assert!(matches!(result, Err(Error::UnmatchedPlaceholder(_))));
}
