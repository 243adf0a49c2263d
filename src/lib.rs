//! # deck-core
//!
//! Core domain logic for a trading-card deck-building tool: an in-memory
//! card catalog, multi-criterion sorting, and per-vendor price aggregation.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Snapshots**: `Card` values are immutable; services
//!    reorder and aggregate them but never mutate them.
//!
//! 2. **Explicit Wiring**: The object graph is static, so services take
//!    their collaborators as constructor parameters. No runtime container.
//!
//! 3. **Pure Services**: Sorting and pricing are pure functions of their
//!    inputs plus the read-only database tables; no I/O, no shared mutable
//!    state.
//!
//! ## Modules
//!
//! - `cards`: Card model, classification, formats, banlists, and the
//!   `CardDatabase` lookup seam
//! - `sorting`: Strategy/order driven comparator chains
//! - `price`: Vendors, currencies, and price aggregation
//! - `deck`: Deck parts and the deck model
//!
//! ## Sorting Quirks
//!
//! The sorting semantics preserve two behaviors downstream views depend
//! on, documented on [`sorting::SortingService`]: the inverted name
//! comparator (descending order yields ascending alphabetical output) and
//! the extra negation on the display-group key of the default strategy.

pub mod cards;
pub mod deck;
pub mod price;
pub mod sorting;

// Re-export commonly used types
pub use crate::cards::{
    BanState, BanlistInfo, Card, CardDatabase, CardType, CardTypeCategory, Format,
    MemoryCardDatabase, Passcode, PasscodeError, ReleaseInfo,
};

pub use crate::deck::{Deck, DeckPart};

pub use crate::price::{CardPrices, Currency, PriceLookupResult, PriceService, Vendor};

pub use crate::sorting::{SortingOptions, SortingOrder, SortingService, SortingStrategy};
