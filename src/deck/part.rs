//! Deck parts and their size bounds.

use serde::{Deserialize, Serialize};

/// A zone of a deck.
///
/// The variant order is the canonical display order (main, extra, side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeckPart {
    Main,
    Extra,
    Side,
}

impl DeckPart {
    /// All deck parts in display order.
    pub const ALL: [DeckPart; 3] = [DeckPart::Main, DeckPart::Extra, DeckPart::Side];

    /// Short identifier used in deck files.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            DeckPart::Main => "main",
            DeckPart::Extra => "extra",
            DeckPart::Side => "side",
        }
    }

    /// Display name of the part.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DeckPart::Main => "Main Deck",
            DeckPart::Extra => "Extra Deck",
            DeckPart::Side => "Side Deck",
        }
    }

    /// Minimum number of cards a legal deck holds in this part.
    #[must_use]
    pub fn min(self) -> usize {
        match self {
            DeckPart::Main => 40,
            DeckPart::Extra | DeckPart::Side => 0,
        }
    }

    /// Maximum number of cards a legal deck holds in this part.
    #[must_use]
    pub fn max(self) -> usize {
        match self {
            DeckPart::Main => 60,
            DeckPart::Extra | DeckPart::Side => 15,
        }
    }
}

impl std::fmt::Display for DeckPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bounds() {
        assert_eq!(DeckPart::Main.min(), 40);
        assert_eq!(DeckPart::Main.max(), 60);
        assert_eq!(DeckPart::Extra.max(), 15);
        assert_eq!(DeckPart::Side.max(), 15);
    }

    #[test]
    fn test_display_order() {
        assert!(DeckPart::Main < DeckPart::Extra);
        assert!(DeckPart::Extra < DeckPart::Side);
    }
}
