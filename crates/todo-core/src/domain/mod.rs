//! Domain Layer
//!
//! Core entities and business rules.

mod clock;
mod entity;
mod item;

pub use clock::{Clock, FixedClock, SystemClock, DEFAULT_TIMESTAMP_FORMAT};
pub use entity::{DomainError, DomainResult, Entity};
pub use item::{Item, ItemId};
