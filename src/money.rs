use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Converts a computed amount into a currency value rounded to cents.
///
/// Non-finite input (which no validated calculation produces) maps to zero.
pub fn to_currency(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().round_dp(2)
}
