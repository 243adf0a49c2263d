//! Card sorting: strategies, orders, and the sorting service.
//!
//! ## Key Types
//!
//! - `SortingStrategy`: Which comparator family to use
//! - `SortingOrder`: Direction (descending by default)
//! - `SortingOptions`: Strategy + order pair
//! - `SortingService`: Applies the comparators

pub mod options;
pub mod service;

pub use options::{SortingOptions, SortingOrder, SortingStrategy};
pub use service::SortingService;
