/// Currency symbol shown before every amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Amount with two decimals and no symbol: `150` -> `"150.00"`.
///
/// Non-finite values render as `0.00`.
pub fn format_money(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.2}", value)
}

/// Amount with the currency symbol: `150` -> `"₹150.00"`.
pub fn format_currency(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_money(value))
}

/// Quantity without trailing zeros: `2.0` -> `"2"`, `1.5` -> `"1.5"`.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(150.0), "₹150.00");
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(12.345), "₹12.35");
        assert_eq!(format_currency(f64::NAN), "₹0.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(0.25), "0.25");
        assert_eq!(format_quantity(f64::INFINITY), "0");
    }
}
