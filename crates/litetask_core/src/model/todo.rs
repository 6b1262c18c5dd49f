//! Todo domain model.
//!
//! # Responsibility
//! - Define the task record and its view filter.
//! - Provide lifecycle helpers for completion state.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `created_at` is fixed at creation time and never mutated.
//! - `text` validation happens at the store boundary; records already in a
//!   collection are trusted to hold non-empty trimmed text.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// View filter restricting which todos a presentation layer displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Every todo in the collection.
    #[default]
    All,
    /// Todos not yet completed.
    Active,
    /// Completed todos only.
    Completed,
}

impl Filter {
    /// Parses the canonical string form. Returns `None` for anything outside
    /// the closed set.
    pub fn parse(value: &str) -> Option<Filter> {
        match value {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    /// Canonical string form, matching the serde wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Returns whether `todo` belongs to this filter's view.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable global ID, the sole key for lookup/update/delete.
    pub id: TodoId,
    /// Task description. Non-empty and trimmed for any todo in a collection.
    pub text: String,
    /// Completion flag, `false` at creation.
    pub completed: bool,
    /// Creation-date label, fixed when the record is created.
    pub created_at: NaiveDate,
}

impl Todo {
    /// Creates a new todo with a generated stable ID, dated today.
    ///
    /// The caller is expected to pass already-trimmed, non-empty text; the
    /// store's create boundary guarantees this.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text, Local::now().date_naive())
    }

    /// Creates a todo with caller-provided identity and creation date.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TodoId, text: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag. All other fields are untouched.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns whether this todo is still actionable.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
