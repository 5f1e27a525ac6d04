//! List Store
//!
//! Owns the ordered item list and the edit session, applies the mutating
//! operations and mirrors the whole list to the repository after each one.
//!
//! Ordering rules:
//! - new items go to the front
//! - completing an item moves it to the back, so finished items pile up at
//!   the tail in completion order
//! - reopening an item moves it back to the front

use std::collections::HashSet;

use crate::domain::{Clock, Entity, Item, ItemId, SystemClock};
use crate::repository::ListRepository;

/// Single owner of the todo list
pub struct ListStore<R, C = SystemClock> {
    items: Vec<Item>,
    /// Item whose description is being edited
    editing: Option<ItemId>,
    /// Text of the input field: new item text, or the edited description
    draft: String,
    repo: R,
    clock: C,
}

impl<R: ListRepository, C: Clock> ListStore<R, C> {
    /// Empty store; nothing is read from the repository
    pub fn new(repo: R, clock: C) -> Self {
        Self {
            items: Vec::new(),
            editing: None,
            draft: String::new(),
            repo,
            clock,
        }
    }

    /// Store populated from whatever the repository holds
    ///
    /// An absent key gives an empty list. A value that cannot be decoded is
    /// discarded (and logged); it stays in storage until the next mutation
    /// overwrites it.
    pub fn restore(repo: R, clock: C) -> Self {
        let mut store = Self::new(repo, clock);
        match store.repo.load() {
            Ok(Some(mut items)) => {
                let mut repaired = 0;
                let mut reassigned = 0;
                let mut seen = HashSet::new();
                for item in items.iter_mut() {
                    if item.normalize(|| store.clock.now()) {
                        repaired += 1;
                    }
                    // Every item must stay addressable by its id
                    while !seen.insert(item.id) {
                        item.id = ItemId::new();
                        reassigned += 1;
                    }
                }
                if repaired > 0 {
                    log::warn!("[STORE] Repaired completion date on {} stored items", repaired);
                }
                if reassigned > 0 {
                    log::warn!("[STORE] Gave fresh ids to {} duplicate stored items", reassigned);
                }
                log::info!("[STORE] Restored {} items", items.len());
                store.items = items;
            }
            Ok(None) => log::info!("[STORE] No stored list, starting empty"),
            Err(e) => log::warn!("[STORE] Discarding unreadable stored list: {}", e),
        }
        store
    }

    // ========================
    // Mutations
    // ========================

    /// Insert a new incomplete item at the front. Blank text is ignored.
    pub fn add(&mut self, description: &str) -> bool {
        if description.trim().is_empty() {
            return false;
        }
        let item = Item::new(description);
        log::debug!("[STORE] Add {}", item.id);
        self.items.insert(0, item);
        self.persist();
        true
    }

    /// Replace the description of the item under edit and leave edit mode
    ///
    /// Blank text is ignored and edit mode stays active. Without an active
    /// edit target nothing happens.
    pub fn edit(&mut self, new_description: &str) -> bool {
        let Some(target) = self.editing else {
            return false;
        };
        if new_description.trim().is_empty() {
            return false;
        }
        let Some(item) = self.items.iter_mut().find(|i| i.id == target) else {
            self.clear_edit();
            return false;
        };

        item.description = new_description.to_string();
        log::debug!("[STORE] Edit {}", target);
        self.clear_edit();
        self.persist();
        true
    }

    /// Apply the current draft to the item under edit
    pub fn commit_edit(&mut self) -> bool {
        let draft = self.draft.clone();
        self.edit(&draft)
    }

    /// Flip completion and move the item to the back (completed) or the
    /// front (reopened)
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let mut item = self.items.remove(index);
        if item.toggle(|| self.clock.now()) {
            self.items.push(item);
        } else {
            self.items.insert(0, item);
        }
        log::debug!("[STORE] Toggle {}", id);
        self.persist();
        true
    }

    /// Remove an item, keeping the others in order
    pub fn delete(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.items.remove(index);
        if self.editing == Some(id) {
            self.clear_edit();
        }
        log::debug!("[STORE] Delete {}", id);
        self.persist();
        true
    }

    // ========================
    // Edit session
    // ========================

    /// Make `id` the edit target and load its description into the draft
    pub fn start_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        self.draft = item.description.clone();
        self.editing = Some(id);
        true
    }

    /// Leave edit mode and clear the draft; the list is untouched
    pub fn cancel_edit(&mut self) -> bool {
        let changed = self.editing.is_some() || !self.draft.is_empty();
        self.clear_edit();
        changed
    }

    /// Replace the draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// The form's single action: update the edit target if there is one,
    /// otherwise add the draft as a new item
    pub fn submit(&mut self) -> bool {
        if self.is_editing() {
            return self.commit_edit();
        }
        if self.draft.trim().is_empty() {
            return false;
        }
        let draft = std::mem::take(&mut self.draft);
        self.add(&draft)
    }

    // ========================
    // Accessors
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Id of the item currently shown at `index`
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).map(Entity::id)
    }

    /// Current index of an item
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    // ========================
    // Internals
    // ========================

    fn clear_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Best effort: a failed save is logged and the in-memory list stays
    /// authoritative
    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.items) {
            log::warn!("[STORE] Failed to persist {} items: {}", self.items.len(), e);
        }
    }
}
