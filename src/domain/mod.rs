//! Domain types for the cultural calendar.
//!
//! This module contains the core data structures:
//! - Event: A catalog entry and its pricing
//! - AudienceMode: Tourist vs. researcher, supplied from outside
//! - TravelerRecord: Contact details typed into booking forms

pub mod audience;
pub mod event;
pub mod traveler;

// Re-export commonly used types
pub use audience::{AudienceMode, PricePair, RESEARCH_ACCESS_PRICE};
pub use event::{Event, EventFeatures, EventId, Pricing};
pub use traveler::TravelerRecord;
