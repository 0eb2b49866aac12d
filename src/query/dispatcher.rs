use crate::math::evaluate_math;
use crate::query::error::QueryError;
use crate::query::percentage::evaluate_percentage;
use crate::query::types::Evaluation;
use crate::units::{convert_temperature, convert_volume, convert_weight};
use log::{debug, trace};

/// Which form of the query a strategy receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// Trimmed and lowercased
    Normalized,
    /// Trimmed only
    Raw,
}

struct Strategy {
    name: &'static str,
    input: Input,
    run: fn(&str) -> Result<Evaluation, QueryError>,
}

fn temperature(query: &str) -> Result<Evaluation, QueryError> {
    Ok(convert_temperature(query)?)
}

fn weight(query: &str) -> Result<Evaluation, QueryError> {
    Ok(convert_weight(query)?)
}

fn volume(query: &str) -> Result<Evaluation, QueryError> {
    Ok(convert_volume(query)?)
}

fn math(query: &str) -> Result<Evaluation, QueryError> {
    Ok(evaluate_math(query)?)
}

// Unit patterns are more specific than arithmetic and must run first:
// "100c" is a temperature, not a failed expression.
const STRATEGIES: [Strategy; 5] = [
    Strategy {
        name: "temperature",
        input: Input::Normalized,
        run: temperature,
    },
    Strategy {
        name: "weight",
        input: Input::Normalized,
        run: weight,
    },
    Strategy {
        name: "volume",
        input: Input::Normalized,
        run: volume,
    },
    Strategy {
        name: "percentage",
        input: Input::Raw,
        run: evaluate_percentage,
    },
    Strategy {
        name: "math",
        input: Input::Normalized,
        run: math,
    },
];

/// Evaluate a search-box query.
///
/// Tries temperature, weight, volume, accounting percentage and arithmetic in
/// that order and returns the first result. Empty input and anything no
/// strategy recognizes yield `None`; the reason is only logged.
pub fn evaluate(query: &str) -> Option<Evaluation> {
    let raw = query.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = raw.to_lowercase();

    for strategy in STRATEGIES.iter() {
        let input = match strategy.input {
            Input::Normalized => normalized.as_str(),
            Input::Raw => raw,
        };
        match (strategy.run)(input) {
            Ok(evaluation) => {
                debug!(
                    "{} strategy matched {:?} -> {:?}",
                    strategy.name, raw, evaluation.text
                );
                return Some(evaluation);
            }
            Err(e) => trace!("{} strategy declined {:?}: {}", strategy.name, raw, e),
        }
    }

    None
}
