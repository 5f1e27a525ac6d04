//! Item Entity
//!
//! A single todo entry: description, completion flag and the moment it was
//! completed.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// Stable identifier assigned when an item is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo item
///
/// Persisted as `{"id", "description", "completed", "completedDate"}`.
/// Records written before ids existed get a fresh one when read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    #[serde(default)]
    pub id: ItemId,
    /// Item text content
    pub description: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
    /// Locale-formatted completion timestamp, present only while completed
    #[serde(
        rename = "completedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<String>,
}

impl Item {
    /// Create a new, incomplete item
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            description: description.into(),
            completed: false,
            completed_at: None,
        }
    }

    /// Flip completion, stamping or clearing `completed_at` to match.
    /// Returns the new completion state.
    pub fn toggle(&mut self, now: impl FnOnce() -> String) -> bool {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(now()) } else { None };
        self.completed
    }

    /// Whether `completed_at` is present exactly when `completed` is set
    pub fn is_consistent(&self) -> bool {
        self.completed == self.completed_at.is_some()
    }

    /// Repair a record read from storage so the completion invariant holds.
    /// Returns true when something had to change.
    pub fn normalize(&mut self, now: impl FnOnce() -> String) -> bool {
        if self.is_consistent() {
            return false;
        }
        if self.completed {
            self.completed_at = Some(now());
        } else {
            self.completed_at = None;
        }
        true
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
