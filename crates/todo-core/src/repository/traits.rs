//! Repository Layer - Core Traits
//!
//! Abstract interface for the persisted list.
//! Implementations can use browser storage, a file, memory, etc.

use std::rc::Rc;
use std::sync::Arc;

use crate::domain::{DomainResult, Item};

/// Persistence for the whole ordered list under a single key
///
/// Calls are synchronous and best effort. There is no partial update: every
/// save rewrites the full list.
pub trait ListRepository {
    /// Read the list. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> DomainResult<Option<Vec<Item>>>;

    /// Replace the stored list
    fn save(&self, items: &[Item]) -> DomainResult<()>;
}

impl<R: ListRepository + ?Sized> ListRepository for &R {
    fn load(&self) -> DomainResult<Option<Vec<Item>>> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> DomainResult<()> {
        (**self).save(items)
    }
}

impl<R: ListRepository + ?Sized> ListRepository for Rc<R> {
    fn load(&self) -> DomainResult<Option<Vec<Item>>> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> DomainResult<()> {
        (**self).save(items)
    }
}

impl<R: ListRepository + ?Sized> ListRepository for Arc<R> {
    fn load(&self) -> DomainResult<Option<Vec<Item>>> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> DomainResult<()> {
        (**self).save(items)
    }
}
