//! Event catalog and filtering.
//!
//! The catalog is the ordered list every other component reads from:
//! built-in events first, then events submitted during the session.

pub mod builtin;
pub mod filter;
pub mod store;

pub use builtin::builtin_events;
pub use filter::{
    category_counts, filter_by_category, filter_by_date, parse_day, CategoryCount, EventView,
    ALL_CATEGORIES, CATEGORIES,
};
pub use store::EventCatalog;
