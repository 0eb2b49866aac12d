use crate::query::types::{Category, Evaluation};
use crate::units::error::UnitError;
use crate::units::formatter::format_fixed;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// `<signed value><c|f>`, converts to the other scale
    static ref IMPLICIT_PATTERN: Regex =
        Regex::new(r"^(-?\d+(?:\.\d+)?)\s*([cf])$").unwrap();

    /// `<signed value><c|f> to|in <c|f>`
    static ref EXPLICIT_PATTERN: Regex =
        Regex::new(r"^(-?\d+(?:\.\d+)?)\s*([cf])\s+(?:to|in)\s+([cf])$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "c" => Some(TemperatureUnit::Celsius),
            "f" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => celsius_to_fahrenheit(value),
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => fahrenheit_to_celsius(value),
        _ => value,
    }
}

/// Lowercase and drop degree signs, borrowing when nothing changes
fn normalize(query: &str) -> Cow<'_, str> {
    let query = query.trim();
    if query.contains('°') || query.chars().any(char::is_uppercase) {
        Cow::Owned(query.to_lowercase().replace('°', ""))
    } else {
        Cow::Borrowed(query)
    }
}

fn unit(letter: &str) -> Result<TemperatureUnit, UnitError> {
    TemperatureUnit::from_letter(letter).ok_or_else(|| UnitError::UnknownUnit(letter.to_string()))
}

/// Temperature conversion strategy
pub fn convert_temperature(query: &str) -> Result<Evaluation, UnitError> {
    let normalized = normalize(query);
    let normalized = normalized.as_ref();

    if let Some(caps) = EXPLICIT_PATTERN.captures(normalized) {
        let (Some(value), Some(from), Some(to)) = (caps.get(1), caps.get(2), caps.get(3)) else {
            return Err(UnitError::NoMatch);
        };
        let (from, to) = (unit(from.as_str())?, unit(to.as_str())?);
        if from == to {
            let text = format!("{}{}", value.as_str(), to.suffix());
            return Ok(Evaluation::new(text, Category::Temperature));
        }
        return render(value.as_str(), from, to);
    }

    let caps = IMPLICIT_PATTERN
        .captures(normalized)
        .ok_or(UnitError::NoMatch)?;
    let (Some(value), Some(from)) = (caps.get(1), caps.get(2)) else {
        return Err(UnitError::NoMatch);
    };
    let from = unit(from.as_str())?;
    render(value.as_str(), from, from.opposite())
}

fn render(value: &str, from: TemperatureUnit, to: TemperatureUnit) -> Result<Evaluation, UnitError> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| UnitError::InvalidValue(value.to_string()))?;
    let converted = convert(parsed, from, to);
    if !converted.is_finite() {
        return Err(UnitError::NonFinite);
    }
    let text = format!("{}{}", format_fixed(converted, 2), to.suffix());
    Ok(Evaluation::new(text, Category::Temperature))
}
