// Fixed-precision rendering for measures and currency.
// One fractional digit for measures, two for currency, always "R$".

/// Fractional digits for measurements.
pub const MEASURE_DECIMALS: usize = 1;

/// Fractional digits for currency amounts.
pub const CURRENCY_DECIMALS: usize = 2;

/// Currency symbol prefix. The app is BRL-only.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Render a measurement with exactly one fractional digit, followed by
/// a space and the unit symbol when a unit is given.
pub fn format_measure(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{:.*}", MEASURE_DECIMALS, value)
    } else {
        format!("{:.*} {}", MEASURE_DECIMALS, value, unit)
    }
}

/// Render a currency amount with exactly two fractional digits behind
/// the fixed symbol.
pub fn format_currency(value: f64) -> String {
    format!("{} {:.*}", CURRENCY_SYMBOL, CURRENCY_DECIMALS, value)
}
