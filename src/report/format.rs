//! Rupee formatting for display

use crate::inputs::currency::group_indian;

/// Shown in place of amounts that overflowed or are undefined
pub const NOT_AVAILABLE: &str = "₹ N/A";

/// Format an amount as whole rupees with en-IN grouping ("₹20,00,000").
///
/// Rounds half away from zero; negatives carry a leading minus
/// ("-₹5,000"). Infinite and NaN values render as [`NOT_AVAILABLE`].
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(15_000.0), "₹15,000");
        assert_eq!(format_currency(2_000_000.0), "₹20,00,000");
        assert_eq!(format_currency(5_439_247.452329), "₹54,39,247");
        assert_eq!(format_currency(123_456_789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_rounding_and_sign() {
        assert_eq!(format_currency(11_367.5), "₹11,368");
        assert_eq!(format_currency(-1_056_139.687), "-₹10,56,140");
        assert_eq!(format_currency(-0.4), "₹0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::INFINITY), NOT_AVAILABLE);
        assert_eq!(format_currency(f64::NEG_INFINITY), NOT_AVAILABLE);
        assert_eq!(format_currency(f64::NAN), NOT_AVAILABLE);
    }
}
