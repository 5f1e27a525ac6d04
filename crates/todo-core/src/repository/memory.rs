//! In-Memory Repository
//!
//! Keeps the encoded list in a string slot, the same shape browser storage
//! uses, so loads and saves exercise the real codec.

use std::sync::Mutex;

use super::codec;
use super::traits::ListRepository;
use crate::domain::{DomainError, DomainResult, Item};

#[derive(Debug, Default)]
struct Slot {
    raw: Option<String>,
    saves: usize,
    read_only: bool,
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    slot: Mutex<Slot>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already stored value, well-formed or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let repo = Self::new();
        repo.lock().raw = Some(raw.into());
        repo
    }

    /// Current stored text
    pub fn raw(&self) -> Option<String> {
        self.lock().raw.clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Make every save fail, like a full browser quota
    pub fn set_read_only(&self, read_only: bool) {
        self.lock().read_only = read_only;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ListRepository for InMemoryRepository {
    fn load(&self) -> DomainResult<Option<Vec<Item>>> {
        match self.lock().raw.as_deref() {
            Some(raw) => codec::decode(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, items: &[Item]) -> DomainResult<()> {
        let raw = codec::encode(items)?;
        let mut slot = self.lock();
        if slot.read_only {
            return Err(DomainError::Storage("repository is read-only".to_string()));
        }
        slot.raw = Some(raw);
        slot.saves += 1;
        Ok(())
    }
}
