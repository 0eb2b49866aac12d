use crate::query::types::Evaluation;
use crate::units::error::UnitError;
use crate::units::formatter::{format_fixed, format_quantity};
use crate::units::tables::{VOLUME, WEIGHT};
use crate::units::types::{UnitDef, UnitTable};
use lazy_static::lazy_static;
use regex::Regex;

const NUMBER: &str = r"(\d+(?:\.\d+)?)";

lazy_static! {
    pub static ref WEIGHT_MATCHER: UnitMatcher = UnitMatcher::new(&WEIGHT).unwrap();
    pub static ref VOLUME_MATCHER: UnitMatcher = UnitMatcher::new(&VOLUME).unwrap();
}

/// Explicit destination of a `<value><unit> to <unit>` query
#[derive(Debug, Clone, Copy)]
pub struct TargetUnit<'q> {
    /// Unit exactly as typed, used as the result suffix
    pub text: &'q str,
    pub unit: &'static UnitDef,
}

/// A recognized conversion request. `target` is `None` for a bare value,
/// which converts to the table's default display unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitMatch<'q> {
    pub value_text: &'q str,
    pub value: f64,
    pub source: &'static UnitDef,
    pub target: Option<TargetUnit<'q>>,
}

/// Recognizer for the bare and explicit patterns of one unit table
pub struct UnitMatcher {
    table: &'static UnitTable,
    bare: Regex,
    explicit: Regex,
}

impl UnitMatcher {
    /// Build both patterns from the table's aliases, longest alias first
    pub fn new(table: &'static UnitTable) -> Result<Self, regex::Error> {
        let alternation = table
            .aliases_longest_first()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let unit = format!("((?:{})s?)", alternation);

        let bare = Regex::new(&format!(r"^{}\s*{}$", NUMBER, unit))?;
        let explicit = Regex::new(&format!(
            r"^{}\s*{}\s+(?:to|in)\s+(?:\d+(?:\.\d+)?\s*)?{}$",
            NUMBER, unit, unit
        ))?;

        Ok(Self {
            table,
            bare,
            explicit,
        })
    }

    pub fn table(&self) -> &'static UnitTable {
        self.table
    }

    /// Match a trimmed, lowercased query against the explicit pattern, then
    /// the bare one
    pub fn match_query<'q>(&self, query: &'q str) -> Result<UnitMatch<'q>, UnitError> {
        if let Some(caps) = self.explicit.captures(query) {
            let (Some(value), Some(source), Some(target)) = (caps.get(1), caps.get(2), caps.get(3))
            else {
                return Err(UnitError::NoMatch);
            };
            let target_text = target.as_str();
            return Ok(UnitMatch {
                value_text: value.as_str(),
                value: parse_value(value.as_str())?,
                source: self.resolve(source.as_str())?,
                target: Some(TargetUnit {
                    text: target_text,
                    unit: self.resolve(target_text)?,
                }),
            });
        }

        let caps = self.bare.captures(query).ok_or(UnitError::NoMatch)?;
        let (Some(value), Some(source)) = (caps.get(1), caps.get(2)) else {
            return Err(UnitError::NoMatch);
        };
        Ok(UnitMatch {
            value_text: value.as_str(),
            value: parse_value(value.as_str())?,
            source: self.resolve(source.as_str())?,
            target: None,
        })
    }

    /// Match and convert, producing the display string for this table
    pub fn convert(&self, query: &str) -> Result<Evaluation, UnitError> {
        let matched = self.match_query(query)?;
        let category = self.table.category;

        let text = match matched.target {
            None => {
                let base = matched.value * matched.source.factor;
                let (value, suffix) = (self.table.bare_display)(base, matched.source);
                format!("{} {}", format_fixed(finite(value)?, 2), suffix)
            }
            // identity conversion echoes the typed value untouched
            Some(target) if target.unit.symbol == matched.source.symbol => {
                format!("{} {}", matched.value_text, target.text)
            }
            Some(target) => {
                let value = self.table.convert(matched.value, matched.source, target.unit);
                format!("{} {}", format_quantity(finite(value)?), target.text)
            }
        };

        Ok(Evaluation::new(text, category))
    }

    fn resolve(&self, unit: &str) -> Result<&'static UnitDef, UnitError> {
        self.table
            .lookup(unit)
            .ok_or_else(|| UnitError::UnknownUnit(unit.to_string()))
    }
}

fn parse_value(text: &str) -> Result<f64, UnitError> {
    text.parse::<f64>()
        .map_err(|_| UnitError::InvalidValue(text.to_string()))
}

fn finite(value: f64) -> Result<f64, UnitError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UnitError::NonFinite)
    }
}

/// Weight conversion strategy over a trimmed, lowercased query
pub fn convert_weight(query: &str) -> Result<Evaluation, UnitError> {
    WEIGHT_MATCHER.convert(query)
}

/// Volume conversion strategy over a trimmed, lowercased query
pub fn convert_volume(query: &str) -> Result<Evaluation, UnitError> {
    VOLUME_MATCHER.convert(query)
}
