//! Game formats.

use serde::{Deserialize, Serialize};

/// A game ruleset/region context.
///
/// Keys the per-card release and banlist tables. `Goat` is a historic
/// format sharing the TCG card pool; it has banlist data but no release
/// tracking of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Tcg,
    Ocg,
    Goat,
}

impl Format {
    /// All known formats.
    pub const ALL: [Format; 3] = [Format::Tcg, Format::Ocg, Format::Goat];

    /// Display name of the format.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::Tcg => "TCG",
            Format::Ocg => "OCG",
            Format::Goat => "GOAT",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
