use crate::query::error::QueryError;
use crate::query::types::{Category, Evaluation};
use crate::units::formatter::format_fixed;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `base + pct%` / `base - pct%`
    static ref ADJUST_PATTERN: Regex =
        Regex::new(r"^(\d+(?:\.\d+)?)\s*([+-])\s*(\d+(?:\.\d+)?)\s*%$").unwrap();

    /// `pct% of base` / `pct% * base`
    static ref PORTION_PATTERN: Regex =
        Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*%\s*(?:of|\*)\s*(\d+(?:\.\d+)?)$").unwrap();
}

/// Accounting percentage strategy over the trimmed raw query. Only the two
/// canonical forms match; every other use of `%` is left to arithmetic.
pub fn evaluate_percentage(query: &str) -> Result<Evaluation, QueryError> {
    if let Some(caps) = ADJUST_PATTERN.captures(query) {
        let base = number(caps.get(1).map(|m| m.as_str()))?;
        let pct = number(caps.get(3).map(|m| m.as_str()))?;
        let delta = base * (pct / 100.0);
        let result = match caps.get(2).map(|m| m.as_str()) {
            Some("-") => base - delta,
            _ => base + delta,
        };
        return Ok(render(result));
    }

    if let Some(caps) = PORTION_PATTERN.captures(query) {
        let pct = number(caps.get(1).map(|m| m.as_str()))?;
        let base = number(caps.get(2).map(|m| m.as_str()))?;
        return Ok(render(base * (pct / 100.0)));
    }

    Err(QueryError::NotPercentage)
}

fn number(text: Option<&str>) -> Result<f64, QueryError> {
    text.and_then(|t| t.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or(QueryError::NotPercentage)
}

fn render(value: f64) -> Evaluation {
    Evaluation::new(format_fixed(value, 2), Category::Percentage)
}
