use crate::math::MathError;
use crate::units::UnitError;

/// Why a strategy declined a query. Never crosses the `evaluate` boundary;
/// only logged.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    NotPercentage,
    Unit(UnitError),
    Math(MathError),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::NotPercentage => write!(f, "Query is not an accounting percentage"),
            QueryError::Unit(e) => write!(f, "Unit error: {}", e),
            QueryError::Math(e) => write!(f, "Math error: {}", e),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<UnitError> for QueryError {
    fn from(e: UnitError) -> Self {
        QueryError::Unit(e)
    }
}

impl From<MathError> for QueryError {
    fn from(e: MathError) -> Self {
        QueryError::Math(e)
    }
}
