//! Price lookup and formatting.

use super::currency::Currency;
use super::vendor::Vendor;
use crate::cards::Card;

/// Result of a price lookup over a set of cards.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceLookupResult<'a> {
    /// Sum of all known prices, in the vendor's currency.
    pub price: f64,

    /// Cards for which the vendor has no price.
    pub missing: Vec<&'a Card>,
}

/// Aggregates card prices per vendor.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriceService;

impl PriceService {
    /// Create a new price service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Get the total price of the cards for the given vendor.
    ///
    /// Sums every price the vendor quotes; cards without a price for this
    /// vendor are collected in `missing` instead of contributing zero
    /// silently.
    pub fn get_price<'a>(
        &self,
        cards: impl IntoIterator<Item = &'a Card>,
        vendor: Vendor,
    ) -> PriceLookupResult<'a> {
        let mut price = 0.0;
        let mut missing = Vec::new();
        for card in cards {
            match card.prices.get(&vendor) {
                Some(card_price) => price += card_price,
                None => missing.push(card),
            }
        }
        PriceLookupResult { price, missing }
    }

    /// Format a price for its currency.
    #[must_use]
    pub fn format_price(&self, value: f64, currency: Currency) -> String {
        format!(
            "{}{:.*}",
            currency.symbol(),
            currency.fraction_digits(),
            value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        let service = PriceService::new();
        assert_eq!(service.format_price(1.5, Currency::Usd), "$1.50");
        assert_eq!(service.format_price(0.333, Currency::Eur), "€0.33");
    }
}
