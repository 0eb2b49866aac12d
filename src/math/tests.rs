use super::{evaluate_math, MathError};
use crate::query::types::Category;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn math(query: &str) -> Option<String> {
    evaluate_math(query).ok().map(|evaluation| {
        assert_eq!(evaluation.category, Category::Math);
        evaluation.text
    })
}

#[test]
fn test_precedence() {
    assert_eq!(math("2 + 3 * 4").as_deref(), Some("14"));
    assert_eq!(math("(2 + 3) * 4").as_deref(), Some("20"));
    assert_eq!(math("2^3 * 4").as_deref(), Some("32"));
    assert_eq!(math("2^3^2").as_deref(), Some("512"));
    assert_eq!(math("-2^2").as_deref(), Some("-4"));
    assert_eq!(math("2 * -3").as_deref(), Some("-6"));
}

#[test]
fn test_left_associativity() {
    assert_eq!(math("10 - 5 - 2").as_deref(), Some("3"));
    assert_eq!(math("20 / 4 * 2").as_deref(), Some("10"));
    assert_eq!(math("100 / 10 / 5").as_deref(), Some("2"));
}

#[test]
fn test_functions_and_constants() {
    assert_eq!(math("sqrt(16)").as_deref(), Some("4"));
    assert_eq!(math("sqrt(3^2 + 4^2)").as_deref(), Some("5"));
    assert_eq!(math("pi").as_deref(), Some("3.1415926536"));
    assert_eq!(math("e").as_deref(), Some("2.7182818285"));
    assert_eq!(math("sin(0) + tan(0)").as_deref(), Some("0"));
    assert_eq!(math("floor(pi * 100) / 100").as_deref(), Some("3.14"));
}

#[test]
fn test_percent_divides_by_hundred() {
    assert_eq!(math("50 * 10%").as_deref(), Some("5"));
    assert_eq!(math("5% + 5%").as_deref(), Some("0.1"));
    assert_eq!(math("10 % 3").as_deref(), Some("1"));
    assert_eq!(math("10%3"), None);
}

#[test]
fn test_float_results_are_rounded() {
    assert_eq!(math("0.1 + 0.2").as_deref(), Some("0.3"));
    assert_eq!(math("1 / 3").as_deref(), Some("0.3333333333"));
    assert_eq!(math("2 / 3").as_deref(), Some("0.6666666667"));
    assert_eq!(math("7 / 2").as_deref(), Some("3.5"));
}

#[test]
fn test_tuple_passthrough() {
    assert_eq!(math("1, 2").as_deref(), Some("(1, 2)"));
    assert_eq!(math("1 + 1, 3 / 2").as_deref(), Some("(2, 1.5)"));
}

#[test]
fn test_gates() {
    assert_eq!(evaluate_math("42"), Err(MathError::NoOperator));
    assert_eq!(evaluate_math("3.5"), Err(MathError::NoOperator));
    assert_eq!(
        evaluate_math("__import__('os')"),
        Err(MathError::DisallowedCharacter('_', 0))
    );
    assert!(matches!(
        evaluate_math("1 + 1; 2"),
        Err(MathError::DisallowedCharacter(';', 5))
    ));
    assert!(matches!(
        evaluate_math("2 × 3"),
        Err(MathError::DisallowedCharacter('×', 2))
    ));
}

#[test]
fn test_unsafe_or_malformed_input() {
    for query in [
        "10 / 0",
        "(10 + 2",
        "10 + 2)",
        "hello world",
        "one plus two",
        "eval('1+1')",
        "__import__('os')",
        "sqrt(-4)",
        "sqrt",
        "pi(2)",
        "2 +",
        "* 2",
        "1..2",
        "",
    ] {
        assert_eq!(math(query), None, "{query:?} should not evaluate");
    }
}

proptest! {
    #[test]
    fn prop_subtraction_is_left_associative(a in 0i64..10_000, b in 0i64..10_000, c in 0i64..10_000) {
        let expected = (a - b - c).to_string();
        prop_assert_eq!(math(&format!("{} - {} - {}", a, b, c)), Some(expected));
    }

    #[test]
    fn prop_multiplication_binds_tighter(a in 0i64..1_000, b in 0i64..1_000, c in 0i64..1_000) {
        let expected = (a + b * c).to_string();
        prop_assert_eq!(math(&format!("{} + {} * {}", a, b, c)), Some(expected));
    }

    #[test]
    fn prop_never_panics(query in "[0-9a-z .+*/()^%,-]{0,40}") {
        let _ = evaluate_math(&query);
    }

    #[test]
    fn prop_evaluation_is_idempotent(query in "[0-9 .+*/()^%-]{1,24}") {
        prop_assert_eq!(evaluate_math(&query), evaluate_math(&query));
    }
}
