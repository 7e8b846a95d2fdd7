// ABOUTME: Integration tests for template resolution
// ABOUTME: Exercises conditional evaluation and placeholder substitution through the public API

use serde_json::json;

use docmint::template::conditions::evaluate_with;
use docmint::template::{Context, FieldLookup, TemplateEngine};
use docmint::{evaluate, substitute};

mod common;
use common::EMPLOYEE_TEMPLATE;

fn employee_context() -> Context {
    Context::from_json(json!({
        "employeeName": "John Doe",
        "salary": "$9000",
        "show": true,
        "isUnemployed": false
    }))
    .unwrap()
}

#[test]
fn test_documented_properties() {
    let on = Context::new().with("x", true);
    let off = Context::new().with("x", false);

    assert_eq!(evaluate("?{x hello}?", Some(&on)), "hello");
    assert_eq!(evaluate("?{x hello}?", Some(&off)), "");
    assert_eq!(evaluate("?{!x hello}?", Some(&off)), "hello");
    assert_eq!(evaluate("?{!x hello}?", Some(&on)), "");

    let both = Context::new().with("a", true).with("b", true);
    assert_eq!(evaluate("?{a ?{b inner}? }?", Some(&both)), "inner ");

    let outer_off = Context::new().with("a", false);
    assert_eq!(evaluate("?{a ?{b inner}? }?", Some(&outer_off)), "");

    let name = Context::new().with("name", "Ann");
    assert_eq!(substitute("Hi {name}!", Some(&name)), "Hi Ann!");

    let zero = Context::new().with("n", 0);
    assert_eq!(substitute("Val: {n}", Some(&zero)), "Val: {n}");

    let ctx = Context::new().with("show", true).with("name", "Bo");
    assert_eq!(
        substitute(&evaluate("?{show {name}}?", Some(&ctx)), Some(&ctx)),
        "Bo"
    );
}

#[test]
fn test_no_context_passthrough() {
    for text in ["", "plain", "?{x y}?", "{name}", "?{unclosed {x}"] {
        assert_eq!(evaluate(text, None), text);
        assert_eq!(substitute(text, None), text);
        assert_eq!(TemplateEngine::new().resolve(text, None), text);
    }
}

#[test]
fn test_employee_template() {
    let engine = TemplateEngine::new();
    let resolved = engine.resolve(EMPLOYEE_TEMPLATE, Some(&employee_context()));

    assert!(resolved.contains("<h1>John Doe</h1>"));
    assert!(resolved.contains("<p>Salary: $9000</p>"));
    assert!(resolved.contains("<p>Employed with pay</p>"));
    assert!(!resolved.contains("looking for work"));
    assert!(!resolved.contains("?{"));
    assert!(!resolved.contains("}?"));
}

#[test]
fn test_resolution_is_idempotent() {
    let engine = TemplateEngine::new();
    let context = employee_context().with("missing", "");
    let template = format!("{}<footer>{{missing}}</footer>", EMPLOYEE_TEMPLATE);

    let once = engine.resolve(&template, Some(&context));
    assert!(once.contains("{missing}"));
    assert_eq!(evaluate(&once, Some(&context)), once);
    assert_eq!(substitute(&once, Some(&context)), once);
}

#[test]
fn test_conditionals_delete_while_placeholders_keep() {
    let context = Context::new().with("flag", false);

    assert_eq!(evaluate("[?{flag on}?]", Some(&context)), "[]");
    assert_eq!(substitute("[{flag}]", Some(&context)), "[{flag}]");
}

#[test]
fn test_deeply_nested_blocks() {
    let context = Context::from_json(json!({"a": 1, "b": "yes", "c": [0]})).unwrap();
    let text = "?{a A?{b B?{c C?{d D}?}?}?}?";

    assert_eq!(evaluate(text, Some(&context)), "ABC");
}

#[test]
fn test_path_lookup_is_opt_in() {
    let context = Context::from_json(json!({
        "employee": {"name": "Ann", "address": {"street": "Main St"}}
    }))
    .unwrap();
    let text = "?{employee.address {employee.address.street}}?";

    assert_eq!(TemplateEngine::new().resolve(text, Some(&context)), "");
    assert_eq!(
        TemplateEngine::new()
            .with_path_lookup()
            .resolve(text, Some(&context)),
        "Main St"
    );
    assert_eq!(
        evaluate_with("?{!employee.fired ok}?", Some(&context), FieldLookup::Path),
        "ok"
    );
}

#[test]
fn test_long_template_with_many_markers() {
    let context = Context::new().with("show", true).with("name", "Ann");
    let template = "?{show <li>{name}</li>}?".repeat(200);

    let resolved = TemplateEngine::new().resolve(&template, Some(&context));
    assert_eq!(resolved, "<li>Ann</li>".repeat(200));
}
