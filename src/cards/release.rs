//! Per-format release dates.

use serde::{Deserialize, Serialize};

use crate::cards::format::Format;

/// Release timestamps per format, in epoch milliseconds.
///
/// A `None` entry means the card has not been released in that format
/// (or the release date is unknown). Only `Tcg` and `Ocg` track releases;
/// historic formats resolve to `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    /// TCG release timestamp.
    pub tcg: Option<i64>,
    /// OCG release timestamp.
    pub ocg: Option<i64>,
}

impl ReleaseInfo {
    /// Create release info with both dates known.
    #[must_use]
    pub const fn new(tcg: Option<i64>, ocg: Option<i64>) -> Self {
        Self { tcg, ocg }
    }

    /// Get the release timestamp for a format.
    #[must_use]
    pub fn for_format(&self, format: Format) -> Option<i64> {
        match format {
            Format::Tcg => self.tcg,
            Format::Ocg => self.ocg,
            Format::Goat => None,
        }
    }
}
