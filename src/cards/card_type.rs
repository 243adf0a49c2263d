//! Card classification: category and display grouping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::deck::DeckPart;

/// Broad card category.
///
/// Determines which attributes are meaningful (battle stats exist only on
/// monsters) and which canonical sub-type ordering applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardTypeCategory {
    Monster,
    Spell,
    Trap,
    Skill,
}

impl CardTypeCategory {
    /// Display name of the category.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CardTypeCategory::Monster => "Monster",
            CardTypeCategory::Spell => "Spell",
            CardTypeCategory::Trap => "Trap",
            CardTypeCategory::Skill => "Skill",
        }
    }
}

impl std::fmt::Display for CardTypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Concrete card type, e.g. "Effect Monster" or "Ritual Spell".
///
/// `sort_group` establishes the display precedence of this type relative
/// to others; the default sorting strategy groups cards by it before any
/// per-card attribute is considered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardType {
    /// Display name of the type.
    pub name: String,

    /// Category the type belongs to.
    pub category: CardTypeCategory,

    /// Display precedence group.
    pub sort_group: i32,

    /// Deck parts cards of this type may be placed in.
    pub deck_parts: BTreeSet<DeckPart>,
}

impl CardType {
    /// Create a card type allowed in the main and side deck.
    #[must_use]
    pub fn new(name: impl Into<String>, category: CardTypeCategory, sort_group: i32) -> Self {
        Self {
            name: name.into(),
            category,
            sort_group,
            deck_parts: BTreeSet::from([DeckPart::Main, DeckPart::Side]),
        }
    }

    /// Override the allowed deck parts (builder pattern).
    #[must_use]
    pub fn with_deck_parts(mut self, deck_parts: impl IntoIterator<Item = DeckPart>) -> Self {
        self.deck_parts = deck_parts.into_iter().collect();
        self
    }
}
