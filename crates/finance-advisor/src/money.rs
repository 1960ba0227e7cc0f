//! Number rendering for message and prompt text

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency marker embedded in generated text
pub const CURRENCY: &str = "₹";

/// Round half away from zero, the rounding used everywhere figures are shown
pub fn round(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentage rounded to one decimal place, as reported in summaries
pub fn round_percent(value: Decimal) -> Decimal {
    round(value, 1)
}

/// Fixed-point rendering, e.g. `416.6666…` → `"416.67"`, `12000` → `"12000.00"`
pub fn fixed(value: Decimal, places: u32) -> String {
    let mut rounded = round(value, places);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(places);
    rounded.to_string()
}

/// Amount with two decimals
pub fn amount(value: Decimal) -> String {
    fixed(value, 2)
}

/// Amount with currency marker, e.g. `"₹416.67"`
pub fn currency(value: Decimal) -> String {
    format!("{CURRENCY}{}", amount(value))
}

/// Percentage value with one decimal, without the `%` sign
pub fn percent(value: Decimal) -> String {
    fixed(value, 1)
}
