// Calculator evaluation tests - arithmetic semantics of the expression evaluator

use mathsolver_core::tooling::{ToolInvokeError, evaluate_expression};

#[test]
fn division_uses_float_semantics() {
    assert_eq!(evaluate_expression("7 / 2").expect("eval"), "3.5");
    assert_eq!(evaluate_expression("12 * 7").expect("eval"), "84");
}

#[test]
fn supports_python_style_powers() {
    assert_eq!(evaluate_expression("2**10").expect("eval"), "1024");
    assert!(evaluate_expression("37593**(1/5)").expect("eval").starts_with("8.22"));
}

#[test]
fn supports_functions_and_constants() {
    assert_eq!(evaluate_expression("sqrt(144)").expect("eval"), "12");
    let value: f64 = evaluate_expression("2 * pi").expect("eval").parse().expect("number");
    assert!((value - std::f64::consts::TAU).abs() < 1e-9);
}

#[test]
fn invalid_expressions_are_errors() {
    assert!(matches!(
        evaluate_expression("two plus two"),
        Err(ToolInvokeError::Evaluation { .. })
    ));
    assert!(matches!(
        evaluate_expression("1 / 0"),
        Err(ToolInvokeError::Evaluation { .. })
    ));
}
