// Unit recognition and conversion for the temperature, weight and volume
// strategies. Tables are immutable statics; the matchers compile once.

pub mod error;
pub mod formatter;
pub mod matcher;
pub mod tables;
pub mod temperature;
pub mod types;

pub use error::UnitError;
pub use formatter::{format_fixed, format_quantity, format_scientific};
pub use matcher::{convert_volume, convert_weight, UnitMatch, UnitMatcher};
pub use tables::{VOLUME, WEIGHT};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use types::{UnitDef, UnitSystem, UnitTable};
