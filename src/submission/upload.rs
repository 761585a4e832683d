//! Pending image uploads for submitted events.
//!
//! A picked image stays local to the submission form until the event is
//! appended. Committing turns it into a stable image reference; dropping
//! it without committing releases the local handle.

use std::path::PathBuf;

use tracing::debug;
use uuid::Uuid;

/// Image picked in the submission form but not yet attached to an event
#[derive(Debug)]
pub struct PendingUpload {
    id: Uuid,
    file_name: String,
    committed: bool,
}

impl PendingUpload {
    /// Wrap a locally picked file
    pub fn new(source: impl Into<PathBuf>) -> Self {
        let source: PathBuf = source.into();
        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        Self {
            id: Uuid::new_v4(),
            file_name,
            committed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Reference stored on the event once committed
    pub fn reference(&self) -> String {
        format!("upload://{}/{}", self.id, self.file_name)
    }

    /// Consume the handle and return the event's image reference
    pub fn commit(mut self) -> String {
        self.committed = true;
        debug!(upload = %self.id, file = %self.file_name, "Committed pending upload");
        self.reference()
    }

    /// Release the handle without attaching it anywhere
    pub fn discard(self) {}
}

impl Drop for PendingUpload {
    fn drop(&mut self) {
        if !self.committed {
            debug!(upload = %self.id, file = %self.file_name, "Released pending upload");
        }
    }
}
