//! Currencies vendors trade in.

use serde::{Deserialize, Serialize};

/// A currency with its formatting conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Eur,
    Usd,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    /// Symbol used when formatting amounts.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }

    /// Number of fraction digits shown for amounts.
    #[must_use]
    pub fn fraction_digits(self) -> usize {
        match self {
            Currency::Eur | Currency::Usd => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
