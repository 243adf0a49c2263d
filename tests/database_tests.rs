//! In-memory card database tests.

use deck_core::cards::{
    Card, CardDatabase, CardType, CardTypeCategory, MemoryCardDatabase, Passcode,
};

fn monster(passcode: &str, name: &str, sub_type: &str) -> Card {
    let card_type = CardType::new("Normal Monster", CardTypeCategory::Monster, 1);
    Card::new(Passcode::parse(passcode).unwrap(), name, card_type).with_sub_type(sub_type)
}

/// Lookup through the trait object works like direct access.
#[test]
fn test_lookup_through_trait_object() {
    let mut database = MemoryCardDatabase::new();
    database.register(monster("46986414", "Dark Magician", "Spellcaster"));
    database.register(monster("89631139", "Blue-Eyes White Dragon", "Dragon"));

    let database: &dyn CardDatabase = &database;

    let passcode = Passcode::parse("89631139").unwrap();
    let found = database.get_card(&passcode).expect("Card should exist");
    assert_eq!(found.name, "Blue-Eyes White Dragon");
    assert_eq!(database.get_cards().len(), 2);
}

/// Sub-type orderings are stable across calls; ranks derived from them
/// stay consistent within a process lifetime.
#[test]
fn test_sub_type_ordering_is_stable() {
    let mut database = MemoryCardDatabase::new();
    database.register_sub_types(
        CardTypeCategory::Monster,
        ["Dragon", "Spellcaster", "Warrior"].map(String::from),
    );

    let first: Vec<String> = database.get_sub_types(CardTypeCategory::Monster).to_vec();
    let second: Vec<String> = database.get_sub_types(CardTypeCategory::Monster).to_vec();
    assert_eq!(first, second);
    assert_eq!(first, ["Dragon", "Spellcaster", "Warrior"]);
}

/// Re-registering a category's sub-types replaces the old ordering.
#[test]
fn test_sub_type_ordering_is_replaced() {
    let mut database = MemoryCardDatabase::new();
    database.register_sub_types(CardTypeCategory::Trap, ["Normal Trap"].map(String::from));
    database.register_sub_types(
        CardTypeCategory::Trap,
        ["Normal Trap", "Continuous Trap", "Counter Trap"].map(String::from),
    );

    assert_eq!(database.get_sub_types(CardTypeCategory::Trap).len(), 3);
}

/// An empty database behaves, it just finds nothing.
#[test]
fn test_empty_database() {
    let database = MemoryCardDatabase::new();

    assert!(database.is_empty());
    assert!(database.get_cards().is_empty());
    assert!(database.get_sub_types(CardTypeCategory::Monster).is_empty());

    let passcode = Passcode::parse("46986414").unwrap();
    assert!(database.get_card(&passcode).is_none());
}
