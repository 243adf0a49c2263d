//! Ban states and per-format banlist data.

use serde::{Deserialize, Serialize};

use crate::cards::format::Format;

/// Ban status of a card within one format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BanState {
    /// No restriction.
    #[default]
    Unlimited,
    /// At most two copies per deck.
    SemiLimited,
    /// At most one copy per deck.
    Limited,
    /// Not playable.
    Banned,
}

impl BanState {
    /// Maximum number of copies a deck may contain under this state.
    #[must_use]
    pub fn max_copies(self) -> u8 {
        match self {
            BanState::Unlimited => 3,
            BanState::SemiLimited => 2,
            BanState::Limited => 1,
            BanState::Banned => 0,
        }
    }

    /// Display name of the state.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BanState::Unlimited => "Unlimited",
            BanState::SemiLimited => "Semi-Limited",
            BanState::Limited => "Limited",
            BanState::Banned => "Banned",
        }
    }
}

/// Ban status per format.
///
/// Defaults to `Unlimited` everywhere, matching cards absent from every
/// banlist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanlistInfo {
    pub tcg: BanState,
    pub ocg: BanState,
    pub goat: BanState,
}

impl BanlistInfo {
    /// Get the ban state for a format.
    #[must_use]
    pub fn for_format(&self, format: Format) -> BanState {
        match format {
            Format::Tcg => self.tcg,
            Format::Ocg => self.ocg,
            Format::Goat => self.goat,
        }
    }
}
