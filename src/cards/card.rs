//! Card model - immutable catalog snapshots.
//!
//! A `Card` is a read-only record describing one catalog entry. Services
//! reorder, group, and price cards but never mutate them; missing numeric
//! data stays `None` in the model and is only defaulted inside comparators.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::cards::banlist::BanlistInfo;
use crate::cards::card_type::CardType;
use crate::cards::format::Format;
use crate::cards::release::ReleaseInfo;
use crate::price::CardPrices;

/// Error produced when parsing a [`Passcode`] from a string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PasscodeError {
    /// The input was not exactly 8 characters long.
    #[error("passcode must be exactly 8 digits, got {0} characters")]
    WrongLength(usize),

    /// The input contained a character outside `0-9`.
    #[error("passcode contains non-digit character {0:?}")]
    NonDigit(char),
}

/// Unique identifier for a card: an 8-digit code.
///
/// Leading zeros are significant, so the code is kept as text rather than
/// a number. Construction goes through [`Passcode::parse`], which enforces
/// the format.
///
/// ## Example
///
/// ```
/// use deck_core::cards::Passcode;
///
/// let passcode = Passcode::parse("46986414").unwrap();
/// assert_eq!(passcode.as_str(), "46986414");
///
/// assert!(Passcode::parse("123").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Passcode(String);

impl Passcode {
    /// Parse a passcode from its textual form.
    pub fn parse(code: &str) -> Result<Self, PasscodeError> {
        if code.len() != 8 {
            return Err(PasscodeError::WrongLength(code.len()));
        }
        if let Some(c) = code.chars().find(|c| !c.is_ascii_digit()) {
            return Err(PasscodeError::NonDigit(c));
        }
        Ok(Self(code.to_string()))
    }

    /// Get the textual form of the passcode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Passcode {
    type Err = PasscodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Passcode {
    type Error = PasscodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Passcode> for String {
    fn from(passcode: Passcode) -> Self {
        passcode.0
    }
}

impl std::fmt::Display for Passcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable catalog entry for a single card.
///
/// Battle stats are `None` for cards without them (spells, traps, or
/// incomplete catalog data); comparators treat missing stats as 0 without
/// writing that default back into the model.
///
/// ## Example
///
/// ```
/// use deck_core::cards::{Card, CardType, CardTypeCategory, Passcode};
///
/// let card_type = CardType::new("Effect Monster", CardTypeCategory::Monster, 2);
/// let card = Card::new(Passcode::parse("46986414").unwrap(), "Dark Magician", card_type)
///     .with_stats(Some(2500), Some(2100), Some(7))
///     .with_sub_type("Spellcaster");
///
/// assert_eq!(card.atk, Some(2500));
/// assert_eq!(card.level, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique 8-digit identifier.
    pub passcode: Passcode,

    /// Display name.
    pub name: String,

    /// Card text.
    pub description: String,

    /// Classification: category and display grouping.
    pub card_type: CardType,

    /// Finer classification within the category, e.g. "Warrior" or
    /// "Equip Spell". Meaningful only relative to the category.
    pub sub_type: String,

    /// Monster attribute, e.g. "DARK". `None` for non-monsters.
    pub attribute: Option<String>,

    /// Attack stat.
    pub atk: Option<i32>,
    /// Defense stat.
    pub def: Option<i32>,
    /// Level or rank.
    pub level: Option<i32>,

    /// Pendulum scale, for pendulum monsters.
    pub pendulum_scale: Option<i32>,
    /// Link rating, for link monsters.
    pub link_rating: Option<i32>,
    /// Link arrow directions, for link monsters.
    pub link_markers: Option<Vec<String>>,

    /// Pre-release name, if the card was known under one.
    pub beta_name: Option<String>,
    /// Name this card is treated as for rulings.
    pub treated_as: Option<String>,
    /// Archetype the card belongs to.
    pub archetype: Option<String>,

    /// Per-format release timestamps (epoch milliseconds).
    pub release: ReleaseInfo,
    /// Formats the card is legal in.
    pub formats: Vec<Format>,
    /// Per-format ban status.
    pub banlist: BanlistInfo,

    /// Per-vendor prices.
    pub prices: CardPrices,
    /// View counter from the catalog source.
    pub views: u64,
}

impl Card {
    /// Create a new card with the given identity and classification.
    ///
    /// All optional data starts empty; use the `with_*` builders to fill
    /// it in.
    #[must_use]
    pub fn new(passcode: Passcode, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            passcode,
            name: name.into(),
            description: String::new(),
            card_type,
            sub_type: String::new(),
            attribute: None,
            atk: None,
            def: None,
            level: None,
            pendulum_scale: None,
            link_rating: None,
            link_markers: None,
            beta_name: None,
            treated_as: None,
            archetype: None,
            release: ReleaseInfo::default(),
            formats: Vec::new(),
            banlist: BanlistInfo::default(),
            prices: CardPrices::default(),
            views: 0,
        }
    }

    /// Set the card text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the sub-type (builder pattern).
    #[must_use]
    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = sub_type.into();
        self
    }

    /// Set the monster attribute (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Set battle stats (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, atk: Option<i32>, def: Option<i32>, level: Option<i32>) -> Self {
        self.atk = atk;
        self.def = def;
        self.level = level;
        self
    }

    /// Set per-format release timestamps (builder pattern).
    #[must_use]
    pub fn with_release(mut self, release: ReleaseInfo) -> Self {
        self.release = release;
        self
    }

    /// Set format legality (builder pattern).
    #[must_use]
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = Format>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Set per-format ban status (builder pattern).
    #[must_use]
    pub fn with_banlist(mut self, banlist: BanlistInfo) -> Self {
        self.banlist = banlist;
        self
    }

    /// Set per-vendor prices (builder pattern).
    #[must_use]
    pub fn with_prices(mut self, prices: CardPrices) -> Self {
        self.prices = prices;
        self
    }

    /// Set the view counter (builder pattern).
    #[must_use]
    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.passcode)
    }
}
