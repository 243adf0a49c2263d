//! Price aggregation tests.

use deck_core::cards::{Card, CardType, CardTypeCategory, Passcode};
use deck_core::price::{CardPrices, Currency, PriceService, Vendor};

fn priced_card(passcode: &str, name: &str, prices: &[(Vendor, f64)]) -> Card {
    let card_type = CardType::new("Spell Card", CardTypeCategory::Spell, 0);
    let prices: CardPrices = prices.iter().copied().collect();
    Card::new(Passcode::parse(passcode).unwrap(), name, card_type).with_prices(prices)
}

/// Prices sum per vendor; other vendors' prices are ignored.
#[test]
fn test_get_price_sums_vendor_prices() {
    let cards = vec![
        priced_card("00000001", "A", &[(Vendor::CardMarket, 1.25), (Vendor::TcgPlayer, 2.0)]),
        priced_card("00000002", "B", &[(Vendor::CardMarket, 0.75)]),
    ];

    let service = PriceService::new();
    let result = service.get_price(&cards, Vendor::CardMarket);

    assert_eq!(result.price, 2.0);
    assert!(result.missing.is_empty());
}

/// Cards without a price for the vendor are collected, not counted as 0.
#[test]
fn test_get_price_collects_missing_cards() {
    let cards = vec![
        priced_card("00000001", "Priced", &[(Vendor::TcgPlayer, 4.5)]),
        priced_card("00000002", "Unpriced", &[]),
        priced_card("00000003", "Elsewhere", &[(Vendor::CardMarket, 9.0)]),
    ];

    let service = PriceService::new();
    let result = service.get_price(&cards, Vendor::TcgPlayer);

    assert_eq!(result.price, 4.5);
    let missing: Vec<&str> = result.missing.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(missing, ["Unpriced", "Elsewhere"]);
}

/// The same pool aggregates independently per vendor.
#[test]
fn test_get_price_across_all_vendors() {
    let cards = vec![
        priced_card(
            "00000001",
            "Everywhere",
            &[
                (Vendor::CardMarket, 2.0),
                (Vendor::TcgPlayer, 3.0),
                (Vendor::CoolStuffInc, 4.0),
            ],
        ),
        priced_card("00000002", "Cardmarket Only", &[(Vendor::CardMarket, 1.0)]),
    ];

    let service = PriceService::new();
    for vendor in Vendor::ALL {
        let result = service.get_price(&cards, vendor);
        let expected = match vendor {
            Vendor::CardMarket => 3.0,
            Vendor::TcgPlayer => 3.0,
            Vendor::CoolStuffInc => 4.0,
        };
        assert_eq!(result.price, expected, "total for {vendor}");
        assert_eq!(result.missing.len(), usize::from(vendor != Vendor::CardMarket));
    }
}

/// An empty card list prices to zero with nothing missing.
#[test]
fn test_get_price_empty() {
    let cards: Vec<Card> = Vec::new();
    let service = PriceService::new();
    let result = service.get_price(&cards, Vendor::CoolStuffInc);

    assert_eq!(result.price, 0.0);
    assert!(result.missing.is_empty());
}

/// Formatting uses the vendor's currency conventions.
#[test]
fn test_format_price_per_currency() {
    let service = PriceService::new();

    assert_eq!(service.format_price(12.5, Currency::Eur), "€12.50");
    assert_eq!(service.format_price(0.0, Currency::Usd), "$0.00");
    assert_eq!(
        service.format_price(100.0, Vendor::CardMarket.currency()),
        "€100.00"
    );
}
