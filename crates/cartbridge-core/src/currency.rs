//! Minor-unit to major-unit currency conversion.

/// Convert a minor-unit amount (cents) to major units.
///
/// Uses the fraction digits carried on the money value when present,
/// otherwise falls back to the usual digits for the currency code.
pub fn to_major_units(cent_amount: i64, fraction_digits: Option<u32>, currency_code: &str) -> f64 {
    let digits = fraction_digits.unwrap_or_else(|| default_fraction_digits(currency_code));
    cent_amount as f64 / 10f64.powi(digits as i32)
}

/// Fraction digits for currencies that do not carry them on the wire
fn default_fraction_digits(currency_code: &str) -> u32 {
    match currency_code {
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF" | "UGX"
        | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_fraction_digits_by_default() {
        assert_eq!(to_major_units(1099, None, "USD"), 10.99);
    }

    #[test]
    fn test_zero_fraction_digit_currency() {
        assert_eq!(to_major_units(1099, None, "JPY"), 1099.0);
    }

    #[test]
    fn test_three_fraction_digit_currency() {
        assert_eq!(to_major_units(1099, None, "KWD"), 1.099);
    }

    #[test]
    fn test_explicit_fraction_digits_win() {
        assert_eq!(to_major_units(1099, Some(0), "USD"), 1099.0);
    }
}
