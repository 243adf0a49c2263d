//! Pricing vendors.

use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// A pricing source with an associated currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vendor {
    CardMarket,
    TcgPlayer,
    CoolStuffInc,
}

impl Vendor {
    /// All known vendors.
    pub const ALL: [Vendor; 3] = [Vendor::CardMarket, Vendor::TcgPlayer, Vendor::CoolStuffInc];

    /// Stable identifier used in data sources.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Vendor::CardMarket => "cardmarket",
            Vendor::TcgPlayer => "tcgplayer",
            Vendor::CoolStuffInc => "coolstuffinc",
        }
    }

    /// Display name of the vendor.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Vendor::CardMarket => "Cardmarket",
            Vendor::TcgPlayer => "TCGPlayer",
            Vendor::CoolStuffInc => "CoolStuffInc",
        }
    }

    /// Currency this vendor's prices are quoted in.
    #[must_use]
    pub fn currency(self) -> Currency {
        match self {
            Vendor::CardMarket => Currency::Eur,
            Vendor::TcgPlayer | Vendor::CoolStuffInc => Currency::Usd,
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
