//! Template history — the five most recent templates, newest first.
//!
//! DESIGN
//! ======
//! The whole list lives under one storage key and is rewritten on every
//! save. Saving puts the template at the front and drops any older entry
//! with the same id, then truncates to capacity. A corrupt or unreadable
//! list reads as empty rather than failing the caller.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::{Storage, StorageError, load_json, save_json};
use crate::template::Template;

pub const STORAGE_KEY: &str = "miro_templates_history";
pub const MAX_HISTORY_SIZE: usize = 5;

pub struct History {
    storage: Arc<dyn Storage>,
}

impl History {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All stored templates, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<Template> {
        match load_json::<Vec<Template>>(self.storage.as_ref(), STORAGE_KEY) {
            Ok(list) => list.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "history: unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Look up a stored template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Template> {
        self.list().into_iter().find(|t| t.id == id)
    }

    /// The most recently saved template.
    #[must_use]
    pub fn latest(&self) -> Option<Template> {
        self.list().into_iter().next()
    }

    /// Put `template` at the front, de-duplicated by id, capped at capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written back.
    pub fn save(&self, template: &Template) -> Result<(), StorageError> {
        let list = push_front(self.list(), template.clone());
        debug!(id = %template.id, len = list.len(), "history: saving");
        save_json(self.storage.as_ref(), STORAGE_KEY, &list)
    }

    /// Drop every stored template.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage entry cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(STORAGE_KEY)
    }
}

fn push_front(existing: Vec<Template>, template: Template) -> Vec<Template> {
    let mut list = Vec::with_capacity(MAX_HISTORY_SIZE);
    let id = template.id.clone();
    list.push(template);
    list.extend(existing.into_iter().filter(|t| t.id != id));
    list.truncate(MAX_HISTORY_SIZE);
    list
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
