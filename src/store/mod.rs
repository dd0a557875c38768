use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::*;

/// In-memory item store.
///
/// Items are kept in insertion order. Cloning a `Store` yields another handle
/// to the same items, which is how the router shares it across requests.
#[derive(Debug, Default)]
pub struct Store {
    items: Arc<Mutex<Vec<Item>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // Every operation is a single push, assignment or removal, so the vector
    // is consistent even if a previous holder panicked.
    fn items(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<Item> {
        self.items().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Item> {
        self.items().iter().find(|item| item.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Append a new incomplete item with a fresh id and the current time.
    pub fn add(&self, text: impl Into<String>) -> Result<Item, StoreError> {
        let text = text.into();
        validate_text(&text)?;

        let item = Item::new(text);
        self.items().push(item.clone());

        tracing::debug!(id = %item.id, "Added item");
        Ok(item)
    }

    /// Merge the provided fields into an existing item.
    ///
    /// Returns `Ok(None)` when no item has the given id, whatever the input.
    /// An empty `text` on an existing item is rejected before anything is
    /// written.
    pub fn update(&self, id: Uuid, input: UpdateItemInput) -> Result<Option<Item>, StoreError> {
        let mut items = self.items();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        if let Some(text) = &input.text {
            validate_text(text)?;
        }

        if let Some(text) = input.text {
            item.text = text;
        }
        if let Some(completed) = input.completed {
            item.completed = completed;
        }

        tracing::debug!(%id, completed = item.completed, "Updated item");
        Ok(Some(item.clone()))
    }

    /// Remove the item with the given id. Returns whether anything was removed.
    pub fn delete(&self, id: Uuid) -> bool {
        let mut items = self.items();
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                tracing::debug!(%id, "Deleted item");
                true
            }
            None => false,
        }
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

fn validate_text(text: &str) -> Result<(), StoreError> {
    if text.is_empty() {
        return Err(StoreError::EmptyText);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_items() {
        let store = Store::new();
        let handle = store.clone();

        handle.add("shared").unwrap();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_text_update_leaves_item_untouched() {
        let store = Store::new();
        let item = store.add("keep me").unwrap();

        let result = store.update(
            item.id,
            UpdateItemInput {
                text: Some(String::new()),
                completed: Some(true),
            },
        );

        assert!(matches!(result, Err(StoreError::EmptyText)));
        assert_eq!(store.get(item.id), Some(item));
    }
}
