use super::{evaluate, Category, Evaluation};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn eval(query: &str) -> Option<(String, Category)> {
    evaluate(query).map(|Evaluation { text, category }| (text, category))
}

fn expect(query: &str, text: &str, category: Category) {
    assert_eq!(
        eval(query),
        Some((text.to_string(), category)),
        "query {:?}",
        query
    );
}

#[test]
fn test_empty_queries() {
    assert_eq!(eval(""), None);
    assert_eq!(eval("   "), None);
    assert_eq!(eval("\t\n"), None);
}

#[test]
fn test_arithmetic_precedence() {
    expect("2 + 3 * 4", "14", Category::Math);
    expect("(2 + 3) * 4", "20", Category::Math);
    expect("2^3 * 4", "32", Category::Math);
    expect("10 - 5 - 2", "3", Category::Math);
    expect("20 / 4 * 2", "10", Category::Math);
}

#[test]
fn test_function_whitelist() {
    expect("sqrt(16)", "4", Category::Math);
    expect("sqrt(3^2 + 4^2)", "5", Category::Math);
    assert_eq!(eval("one plus two"), None);
    assert_eq!(eval("__import__('os')"), None);
    assert_eq!(eval("eval('1+1')"), None);
}

#[test]
fn test_case_insensitivity() {
    expect("Sqrt(16)", "4", Category::Math);
    expect("SQRT(16)", "4", Category::Math);
    expect("1KG to LBS", "2.20 lbs", Category::Weight);
    expect("100C", "212.00°F", Category::Temperature);
    expect("10% OF 50", "5.00", Category::Percentage);
}

#[test]
fn test_percentage_meanings_diverge() {
    expect("100 + 10%", "110.00", Category::Percentage);
    expect("100 - 10%", "90.00", Category::Percentage);
    expect("20% of 150", "30.00", Category::Percentage);
    expect("50 * 10%", "5", Category::Math);
    expect("5% + 5%", "0.1", Category::Math);
}

#[test]
fn test_identity_conversions() {
    expect("12.5kg to kg", "12.5 kg", Category::Weight);
    expect("3 pounds in lb", "3 lb", Category::Weight);
    expect("250ml to ml", "250 ml", Category::Volume);
    expect("21c to c", "21°C", Category::Temperature);
}

#[test]
fn test_scientific_thresholds() {
    expect("1000000kg to g", "1.00e+09 g", Category::Weight);
    expect("1kg to g", "1000.00 g", Category::Weight);
    expect("1 ml to gal", "2.64e-04 gal", Category::Volume);
    expect("1 cup to l", "0.2366 l", Category::Volume);
}

#[test]
fn test_temperature() {
    expect("-40c", "-40.00°F", Category::Temperature);
    expect("-40f", "-40.00°C", Category::Temperature);
    expect("100 °C to F", "212.00°F", Category::Temperature);
}

#[test]
fn test_strategy_order() {
    // a unit suffix wins over arithmetic
    expect("100c", "212.00°F", Category::Temperature);
    expect("2 lbs", "0.91 kg", Category::Weight);
    expect("2 l", "67.63 fl oz", Category::Volume);
    // accounting form wins over the arithmetic reading
    expect("200 + 50%", "300.00", Category::Percentage);
}

#[test]
fn test_malformed_input_is_none() {
    for query in [
        "10 / 0",
        "(10 + 2",
        "hello world",
        "42",
        "100 furlongs",
        "1kg to ml",
        "10 to 20",
        "import os",
        "1 + 1; rm -rf /",
        "%",
        "()",
    ] {
        assert_eq!(eval(query), None, "query {:?}", query);
    }
}

#[test]
fn test_tuple_passthrough() {
    expect("1, 2", "(1, 2)", Category::Math);
}

proptest! {
    #[test]
    fn prop_evaluate_is_idempotent(query in "\\PC{0,32}") {
        prop_assert_eq!(evaluate(&query), evaluate(&query));
    }

    #[test]
    fn prop_identity_weight_conversion(value in 0u32..100_000, unit in prop::sample::select(vec!["g", "kg", "lb", "oz", "mg"])) {
        let query = format!("{}{} to {}", value, unit, unit);
        prop_assert_eq!(
            eval(&query),
            Some((format!("{} {}", value, unit), Category::Weight))
        );
    }

    #[test]
    fn prop_identity_volume_conversion(value in 0u32..100_000, unit in prop::sample::select(vec!["ml", "l", "cup", "gal", "qt"])) {
        let query = format!("{} {} in {}", value, unit, unit);
        prop_assert_eq!(
            eval(&query),
            Some((format!("{} {}", value, unit), Category::Volume))
        );
    }
}
