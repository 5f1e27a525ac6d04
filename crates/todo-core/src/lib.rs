//! Todo Core
//!
//! Layered architecture:
//! - domain: Item entity, clock, errors
//! - repository: persistence trait and implementations
//! - store: the list owner and its mutation rules

pub mod config;
pub mod domain;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use domain::{Clock, DomainError, DomainResult, FixedClock, Item, ItemId, SystemClock};
pub use repository::{InMemoryRepository, JsonFileRepository, ListRepository};
pub use store::ListStore;
