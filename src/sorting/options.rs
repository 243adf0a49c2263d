//! Sorting strategies and orders.

use serde::{Deserialize, Serialize};

/// Comparator family used to sort cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortingStrategy {
    /// Sort cards like they would appear in a sorted deck.
    #[default]
    Default,

    Name,

    Atk,
    Def,
    Level,

    Views,

    ReleaseTcg,
    ReleaseOcg,
}

impl SortingStrategy {
    /// Stable identifier, as presented in the UI.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SortingStrategy::Default => "Default",
            SortingStrategy::Name => "Name",
            SortingStrategy::Atk => "ATK",
            SortingStrategy::Def => "DEF",
            SortingStrategy::Level => "Level",
            SortingStrategy::Views => "Views",
            SortingStrategy::ReleaseTcg => "Release TCG",
            SortingStrategy::ReleaseOcg => "Release OCG",
        }
    }

    /// Resolve a strategy from its identifier.
    ///
    /// Unrecognized identifiers degrade to [`SortingStrategy::Default`]
    /// rather than failing; callers at the UI boundary pass user-visible
    /// strings through here.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "Name" => SortingStrategy::Name,
            "ATK" => SortingStrategy::Atk,
            "DEF" => SortingStrategy::Def,
            "Level" => SortingStrategy::Level,
            "Views" => SortingStrategy::Views,
            "Release TCG" => SortingStrategy::ReleaseTcg,
            "Release OCG" => SortingStrategy::ReleaseOcg,
            _ => SortingStrategy::Default,
        }
    }
}

/// Direction of a sort.
///
/// Note the quirk for [`SortingStrategy::Name`]: `Desc` yields ascending
/// alphabetical order and `Asc` the reverse. This mirrors the behavior the
/// tool has always shipped with and is kept on purpose; see
/// [`SortingService`](crate::sorting::SortingService).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortingOrder {
    #[default]
    Desc,
    Asc,
}

/// Options describing how to sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingOptions {
    pub strategy: SortingStrategy,
    #[serde(default)]
    pub order: SortingOrder,
}

impl SortingOptions {
    /// Create options with the default descending order.
    #[must_use]
    pub fn new(strategy: SortingStrategy) -> Self {
        Self {
            strategy,
            order: SortingOrder::Desc,
        }
    }

    /// Set the order (builder pattern).
    #[must_use]
    pub fn with_order(mut self, order: SortingOrder) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for strategy in [
            SortingStrategy::Default,
            SortingStrategy::Name,
            SortingStrategy::Atk,
            SortingStrategy::Def,
            SortingStrategy::Level,
            SortingStrategy::Views,
            SortingStrategy::ReleaseTcg,
            SortingStrategy::ReleaseOcg,
        ] {
            assert_eq!(SortingStrategy::from_id(strategy.id()), strategy);
        }
    }

    #[test]
    fn test_unknown_id_degrades_to_default() {
        assert_eq!(
            SortingStrategy::from_id("Price"),
            SortingStrategy::Default
        );
    }

    #[test]
    fn test_default_order_is_desc() {
        let options = SortingOptions::new(SortingStrategy::Name);
        assert_eq!(options.order, SortingOrder::Desc);
    }
}
