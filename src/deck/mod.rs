//! Deck model: deck parts and the deck itself.
//!
//! Only the data model lives here. Deck mutation, randomization, and
//! import/export belong to the application layer.

pub mod part;

pub use part::DeckPart;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cards::Card;

/// A deck: an optional name plus a card list per deck part.
///
/// ## Example
///
/// ```
/// use deck_core::cards::{Card, CardType, CardTypeCategory, Passcode};
/// use deck_core::deck::{Deck, DeckPart};
///
/// let card_type = CardType::new("Spell Card", CardTypeCategory::Spell, 0);
/// let card = Card::new(Passcode::parse("12345678").unwrap(), "Pot of Greed", card_type);
///
/// let mut deck = Deck::new(Some("Goat Control".to_string()));
/// deck.add_card(DeckPart::Main, card);
///
/// assert_eq!(deck.part(DeckPart::Main).len(), 1);
/// assert_eq!(deck.size(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck name, if any.
    pub name: Option<String>,

    parts: BTreeMap<DeckPart, Vec<Card>>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            parts: BTreeMap::new(),
        }
    }

    /// Cards in one deck part.
    #[must_use]
    pub fn part(&self, part: DeckPart) -> &[Card] {
        self.parts.get(&part).map_or(&[], Vec::as_slice)
    }

    /// Add a card to a deck part.
    pub fn add_card(&mut self, part: DeckPart, card: Card) {
        self.parts.entry(part).or_default().push(card);
    }

    /// Iterate over all cards, main deck first, then extra, then side.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        DeckPart::ALL.into_iter().flat_map(|part| self.part(part).iter())
    }

    /// Total number of cards across all parts.
    #[must_use]
    pub fn size(&self) -> usize {
        self.parts.values().map(Vec::len).sum()
    }
}
