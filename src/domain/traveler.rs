//! Traveler details entered in booking forms.

use serde::{Deserialize, Serialize};

/// One traveler's contact details.
///
/// Every field is free text and may be empty; the form boundary decides
/// which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerRecord {
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
}

impl TravelerRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// True when nothing has been typed yet
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.age.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}
