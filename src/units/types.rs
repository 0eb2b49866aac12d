use crate::query::types::Category;

/// Which family a unit belongs to; picks the display unit for bare values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// One alias in a unit table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    /// Lowercase spelling as typed by the user (e.g. "pounds")
    pub alias: &'static str,
    /// Canonical symbol shared by every spelling of the same unit (e.g. "lb")
    pub symbol: &'static str,
    /// Scale factor relative to the table's base unit
    pub factor: f64,
    pub system: UnitSystem,
}

/// Conversion applied to a bare `<value><unit>` query: takes the value in base
/// units and the source unit, returns the converted value and its suffix
pub type BareDisplay = fn(f64, &UnitDef) -> (f64, &'static str);

/// Static alias table for one conversion domain
pub struct UnitTable {
    pub category: Category,
    /// Name of the base unit all factors are relative to
    pub base: &'static str,
    pub units: &'static [UnitDef],
    pub bare_display: BareDisplay,
}

impl UnitTable {
    /// Resolve a typed unit. Exact aliases win; otherwise a single trailing
    /// plural `s` is dropped and the lookup retried.
    pub fn lookup(&self, unit: &str) -> Option<&'static UnitDef> {
        let units: &'static [UnitDef] = self.units;
        units
            .iter()
            .find(|def| def.alias == unit)
            .or_else(|| {
                let singular = unit.strip_suffix('s')?;
                units.iter().find(|def| def.alias == singular)
            })
    }

    /// Aliases sorted longest first so pattern alternation never truncates
    /// a longer spelling ("lbs" before "lb", "tonne" before "ton").
    pub fn aliases_longest_first(&self) -> Vec<&'static str> {
        let mut aliases: Vec<&'static str> = self.units.iter().map(|def| def.alias).collect();
        aliases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        aliases
    }

    /// Convert a value between two units of this table via the base unit
    pub fn convert(&self, value: f64, from: &UnitDef, to: &UnitDef) -> f64 {
        value * from.factor / to.factor
    }
}
