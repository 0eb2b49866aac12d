/// Values at or above this render in scientific notation
pub const SCIENTIFIC_UPPER: f64 = 1_000_000.0;
/// Values below this render in scientific notation
pub const SCIENTIFIC_LOWER: f64 = 0.01;

/// Format a converted quantity using the shared threshold policy:
/// scientific outside `[0.01, 1e6)`, four decimals below 1, two otherwise.
pub fn format_quantity(value: f64) -> String {
    if value >= SCIENTIFIC_UPPER || value < SCIENTIFIC_LOWER {
        format_scientific(value, 2)
    } else if value < 1.0 {
        format!("{:.4}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Fixed-point rendering with `decimals` digits after the point
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Scientific notation with a signed, at least two digit exponent
/// (`1.00e+09`, `5.00e-03`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        // inf / NaN carry no exponent
        return raw;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    if digits.len() < 2 {
        format!("{}e{}0{}", mantissa, sign, digits)
    } else {
        format!("{}e{}{}", mantissa, sign, digits)
    }
}
