use crate::query::types::Category;
use crate::units::types::{UnitDef, UnitSystem, UnitTable};

const GRAMS_PER_POUND: f64 = 453.59237;
const ML_PER_FLUID_OUNCE: f64 = 29.5735295625;

macro_rules! unit {
    ($alias:expr, $symbol:expr, $factor:expr, $system:ident) => {
        UnitDef {
            alias: $alias,
            symbol: $symbol,
            factor: $factor,
            system: UnitSystem::$system,
        }
    };
}

/// Weight aliases, base unit grams
pub const WEIGHT_UNITS: &[UnitDef] = &[
    unit!("mg", "mg", 0.001, Metric),
    unit!("milligram", "mg", 0.001, Metric),
    unit!("milligrams", "mg", 0.001, Metric),
    unit!("g", "g", 1.0, Metric),
    unit!("gram", "g", 1.0, Metric),
    unit!("grams", "g", 1.0, Metric),
    unit!("kg", "kg", 1_000.0, Metric),
    unit!("kilo", "kg", 1_000.0, Metric),
    unit!("kilogram", "kg", 1_000.0, Metric),
    unit!("kilograms", "kg", 1_000.0, Metric),
    unit!("tonne", "t", 1_000_000.0, Metric),
    unit!("tonnes", "t", 1_000_000.0, Metric),
    unit!("oz", "oz", 28.349523125, Imperial),
    unit!("ounce", "oz", 28.349523125, Imperial),
    unit!("ounces", "oz", 28.349523125, Imperial),
    unit!("lb", "lb", GRAMS_PER_POUND, Imperial),
    unit!("lbs", "lb", GRAMS_PER_POUND, Imperial),
    unit!("pound", "lb", GRAMS_PER_POUND, Imperial),
    unit!("pounds", "lb", GRAMS_PER_POUND, Imperial),
    unit!("st", "st", 6_350.29318, Imperial),
    unit!("stone", "st", 6_350.29318, Imperial),
    unit!("stones", "st", 6_350.29318, Imperial),
    unit!("ton", "ton", 907_184.74, Imperial),
    unit!("tons", "ton", 907_184.74, Imperial),
];

/// Volume aliases, base unit milliliters
pub const VOLUME_UNITS: &[UnitDef] = &[
    unit!("ml", "ml", 1.0, Metric),
    unit!("milliliter", "ml", 1.0, Metric),
    unit!("milliliters", "ml", 1.0, Metric),
    unit!("millilitre", "ml", 1.0, Metric),
    unit!("millilitres", "ml", 1.0, Metric),
    unit!("cl", "cl", 10.0, Metric),
    unit!("dl", "dl", 100.0, Metric),
    unit!("l", "l", 1_000.0, Metric),
    unit!("liter", "l", 1_000.0, Metric),
    unit!("liters", "l", 1_000.0, Metric),
    unit!("litre", "l", 1_000.0, Metric),
    unit!("litres", "l", 1_000.0, Metric),
    unit!("tsp", "tsp", 4.92892159375, Imperial),
    unit!("teaspoon", "tsp", 4.92892159375, Imperial),
    unit!("teaspoons", "tsp", 4.92892159375, Imperial),
    unit!("tbsp", "tbsp", 14.78676478125, Imperial),
    unit!("tablespoon", "tbsp", 14.78676478125, Imperial),
    unit!("tablespoons", "tbsp", 14.78676478125, Imperial),
    unit!("fl oz", "fl oz", ML_PER_FLUID_OUNCE, Imperial),
    unit!("floz", "fl oz", ML_PER_FLUID_OUNCE, Imperial),
    unit!("fluid ounce", "fl oz", ML_PER_FLUID_OUNCE, Imperial),
    unit!("fluid ounces", "fl oz", ML_PER_FLUID_OUNCE, Imperial),
    unit!("cup", "cup", 236.5882365, Imperial),
    unit!("cups", "cup", 236.5882365, Imperial),
    unit!("pt", "pt", 473.176473, Imperial),
    unit!("pint", "pt", 473.176473, Imperial),
    unit!("pints", "pt", 473.176473, Imperial),
    unit!("qt", "qt", 946.352946, Imperial),
    unit!("quart", "qt", 946.352946, Imperial),
    unit!("quarts", "qt", 946.352946, Imperial),
    unit!("gal", "gal", 3_785.411784, Imperial),
    unit!("gallon", "gal", 3_785.411784, Imperial),
    unit!("gallons", "gal", 3_785.411784, Imperial),
];

// Metric weights display in pounds, imperial ones in kilograms
fn weight_bare_display(grams: f64, source: &UnitDef) -> (f64, &'static str) {
    match source.system {
        UnitSystem::Metric => (grams / GRAMS_PER_POUND, "lbs"),
        UnitSystem::Imperial => (grams / 1_000.0, "kg"),
    }
}

fn volume_bare_display(ml: f64, source: &UnitDef) -> (f64, &'static str) {
    match source.system {
        UnitSystem::Metric => (ml / ML_PER_FLUID_OUNCE, "fl oz"),
        UnitSystem::Imperial if ml >= 1_000.0 => (ml / 1_000.0, "l"),
        UnitSystem::Imperial => (ml, "ml"),
    }
}

pub static WEIGHT: UnitTable = UnitTable {
    category: Category::Weight,
    base: "g",
    units: WEIGHT_UNITS,
    bare_display: weight_bare_display,
};

pub static VOLUME: UnitTable = UnitTable {
    category: Category::Volume,
    base: "ml",
    units: VOLUME_UNITS,
    bare_display: volume_bare_display,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn check_table(table: &UnitTable) {
        let mut seen = HashSet::new();
        let mut factors: HashMap<&str, f64> = HashMap::new();
        for def in table.units {
            assert!(def.factor > 0.0, "{} has non-positive factor", def.alias);
            assert!(
                seen.insert(def.alias.to_lowercase()),
                "duplicate alias {}",
                def.alias
            );
            assert_eq!(def.alias, def.alias.to_lowercase());

            // every spelling of a symbol agrees on the factor and family
            let factor = *factors.entry(def.symbol).or_insert(def.factor);
            assert_eq!(factor, def.factor, "{} disagrees with {}", def.alias, def.symbol);
        }
        assert!(table.lookup(table.base).is_some());
    }

    #[test]
    fn test_tables_are_consistent() {
        check_table(&WEIGHT);
        check_table(&VOLUME);
    }

    #[test]
    fn test_plural_variants_resolve_to_same_factor() {
        assert_eq!(WEIGHT.lookup("pounds").unwrap().symbol, "lb");
        assert_eq!(WEIGHT.lookup("lbs").unwrap().symbol, "lb");
        assert_eq!(WEIGHT.lookup("kgs").unwrap().symbol, "kg");
        assert_eq!(VOLUME.lookup("ls").unwrap().symbol, "l");
        assert_eq!(VOLUME.lookup("fl ozs").unwrap().symbol, "fl oz");
        assert!(WEIGHT.lookup("furlong").is_none());
        assert!(WEIGHT.lookup("s").is_none());
    }

    #[test]
    fn test_aliases_sorted_longest_first() {
        let aliases = WEIGHT.aliases_longest_first();
        let lbs = aliases.iter().position(|a| *a == "lbs").unwrap();
        let lb = aliases.iter().position(|a| *a == "lb").unwrap();
        assert!(lbs < lb);
        let tonne = aliases.iter().position(|a| *a == "tonne").unwrap();
        let ton = aliases.iter().position(|a| *a == "ton").unwrap();
        assert!(tonne < ton);
        assert!(aliases.windows(2).all(|w| w[0].len() >= w[1].len()));
    }

    #[test]
    fn test_bare_display_units() {
        let kg = WEIGHT.lookup("kg").unwrap();
        let (value, suffix) = (WEIGHT.bare_display)(1_000.0, kg);
        assert_eq!(suffix, "lbs");
        assert!((value - 2.20462).abs() < 1e-4);

        let gal = VOLUME.lookup("gal").unwrap();
        assert_eq!((VOLUME.bare_display)(3_785.411784, gal).1, "l");
        let cup = VOLUME.lookup("cup").unwrap();
        assert_eq!((VOLUME.bare_display)(236.5882365, cup), (236.5882365, "ml"));
    }
}
