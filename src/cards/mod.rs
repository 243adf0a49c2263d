//! Card model and catalog access.
//!
//! ## Key Types
//!
//! - `Passcode`: Validated 8-digit card identifier
//! - `Card`: Immutable catalog entry
//! - `CardType` / `CardTypeCategory`: Classification and display grouping
//! - `Format`: Game format keying release and banlist tables
//! - `CardDatabase`: Read-only catalog lookup trait
//! - `MemoryCardDatabase`: In-memory implementation

pub mod banlist;
pub mod card;
pub mod card_type;
pub mod database;
pub mod format;
pub mod release;

pub use banlist::{BanState, BanlistInfo};
pub use card::{Card, Passcode, PasscodeError};
pub use card_type::{CardType, CardTypeCategory};
pub use database::{CardDatabase, MemoryCardDatabase};
pub use format::Format;
pub use release::ReleaseInfo;
