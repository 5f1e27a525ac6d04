//! Browser Storage Repository
//!
//! `ListRepository` over `window.localStorage`. The storage handle is looked
//! up on every call, so the repository itself only carries the key.

use todo_core::domain::{DomainError, DomainResult, Item};
use todo_core::repository::{codec, ListRepository};

pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> DomainResult<web_sys::Storage> {
    let window = web_sys::window()
        .ok_or_else(|| DomainError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| DomainError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| DomainError::Unavailable("localStorage is disabled".to_string()))
}

impl ListRepository for LocalStorageRepository {
    fn load(&self) -> DomainResult<Option<Vec<Item>>> {
        let raw = local_storage()?
            .get_item(&self.key)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))?;
        raw.as_deref().map(codec::decode).transpose()
    }

    fn save(&self, items: &[Item]) -> DomainResult<()> {
        let raw = codec::encode(items)?;
        local_storage()?
            .set_item(&self.key, &raw)
            // Typically QuotaExceededError
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }
}
