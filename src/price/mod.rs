//! Price aggregation across vendors.
//!
//! ## Key Types
//!
//! - `Currency`: Currency a vendor trades in
//! - `Vendor`: A pricing source
//! - `CardPrices`: Per-vendor price table attached to each card
//! - `PriceService`: Summation and formatting

pub mod currency;
pub mod service;
pub mod vendor;

pub use currency::Currency;
pub use service::{PriceLookupResult, PriceService};
pub use vendor::Vendor;

use rustc_hash::FxHashMap;

/// Per-vendor prices for one card.
pub type CardPrices = FxHashMap<Vendor, f64>;
