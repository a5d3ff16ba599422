//! Price selection over a list of candidates.

use cartbridge_entities::commerce::Price;

/// Pick the price to publish: the preferred currency when present,
/// otherwise the first candidate.
pub fn select_price<'a>(prices: &'a [Price], preferred_currency: Option<&str>) -> Option<&'a Price> {
    if let Some(currency) = preferred_currency {
        if let Some(price) = prices.iter().find(|p| p.value.currency_code == currency) {
            return Some(price);
        }
    }
    prices.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartbridge_entities::commerce::Money;

    fn price(currency: &str, cent_amount: i64) -> Price {
        Price {
            value: Money {
                currency_code: currency.to_string(),
                cent_amount,
                fraction_digits: None,
            },
            country: None,
            valid_from: None,
            valid_until: None,
        }
    }

    #[test]
    fn test_preferred_currency_wins() {
        let prices = vec![price("USD", 1000), price("EUR", 900)];
        let selected = select_price(&prices, Some("EUR")).unwrap();
        assert_eq!(selected.value.currency_code, "EUR");
    }

    #[test]
    fn test_falls_back_to_first_candidate() {
        let prices = vec![price("USD", 1000), price("EUR", 900)];
        let selected = select_price(&prices, Some("GBP")).unwrap();
        assert_eq!(selected.value.currency_code, "USD");
    }

    #[test]
    fn test_no_preference_takes_first() {
        let prices = vec![price("USD", 1000)];
        assert_eq!(
            select_price(&prices, None).unwrap().value.currency_code,
            "USD"
        );
    }

    #[test]
    fn test_empty_candidates_yield_nothing() {
        assert!(select_price(&[], Some("USD")).is_none());
    }
}
