//! Card database: catalog lookup and canonical sub-type orderings.
//!
//! `CardDatabase` is the seam between the domain services and whatever
//! loads the catalog (an HTTP data loader in the full application). The
//! services only need lookups, so the trait stays read-only;
//! `MemoryCardDatabase` is the single in-process implementation.

use rustc_hash::FxHashMap;

use super::card::{Card, Passcode};
use super::card_type::CardTypeCategory;

/// Read-only catalog access.
///
/// Implementations must be deterministic: `get_sub_types` returns the same
/// ordering for a category across calls within a process lifetime, since
/// sorting derives sub-type ranks from it.
pub trait CardDatabase {
    /// Look up a card by passcode.
    fn get_card(&self, passcode: &Passcode) -> Option<&Card>;

    /// All cards, in registration order.
    fn get_cards(&self) -> &[Card];

    /// Canonical sub-type ordering for a category.
    ///
    /// The position of a sub-type in this slice is its display rank.
    /// Categories without a registered ordering yield an empty slice.
    fn get_sub_types(&self, category: CardTypeCategory) -> &[String];
}

/// In-memory card database.
///
/// Stores cards in registration order with a passcode index for lookup.
///
/// ## Example
///
/// ```
/// use deck_core::cards::{Card, CardDatabase, CardType, CardTypeCategory, MemoryCardDatabase, Passcode};
///
/// let mut database = MemoryCardDatabase::new();
///
/// let passcode = Passcode::parse("46986414").unwrap();
/// let card_type = CardType::new("Normal Monster", CardTypeCategory::Monster, 1);
/// database.register(Card::new(passcode.clone(), "Dark Magician", card_type));
///
/// let found = database.get_card(&passcode).unwrap();
/// assert_eq!(found.name, "Dark Magician");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryCardDatabase {
    cards: Vec<Card>,
    by_passcode: FxHashMap<Passcode, usize>,
    sub_types: FxHashMap<CardTypeCategory, Vec<String>>,
}

impl MemoryCardDatabase {
    /// Create a new empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same passcode already exists.
    pub fn register(&mut self, card: Card) {
        if self.by_passcode.contains_key(&card.passcode) {
            panic!("Card with passcode {} already registered", card.passcode);
        }
        log::debug!("Registering card {} ({})", card.name, card.passcode);
        self.by_passcode.insert(card.passcode.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// Register the canonical sub-type ordering for a category.
    ///
    /// Replaces any previous ordering for the category.
    pub fn register_sub_types(
        &mut self,
        category: CardTypeCategory,
        sub_types: impl IntoIterator<Item = String>,
    ) {
        let sub_types: Vec<String> = sub_types.into_iter().collect();
        log::debug!(
            "Registering {} sub-types for category {}",
            sub_types.len(),
            category
        );
        self.sub_types.insert(category, sub_types);
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the database holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

impl CardDatabase for MemoryCardDatabase {
    fn get_card(&self, passcode: &Passcode) -> Option<&Card> {
        self.by_passcode.get(passcode).map(|&i| &self.cards[i])
    }

    fn get_cards(&self) -> &[Card] {
        &self.cards
    }

    fn get_sub_types(&self, category: CardTypeCategory) -> &[String] {
        self.sub_types.get(&category).map_or(&[], Vec::as_slice)
    }
}
