use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    NoMatch,
    UnknownUnit(String),
    InvalidValue(String),
    NonFinite,
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::NoMatch => write!(f, "Query is not a unit conversion"),
            UnitError::UnknownUnit(unit) => write!(f, "Unknown unit: {}", unit),
            UnitError::InvalidValue(value) => write!(f, "Invalid value: {}", value),
            UnitError::NonFinite => write!(f, "Conversion result is not finite"),
        }
    }
}

impl std::error::Error for UnitError {}
