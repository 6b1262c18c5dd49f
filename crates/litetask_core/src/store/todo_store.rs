//! Todo store: single owner of collection, edit session, and filter.
//!
//! # Responsibility
//! - Apply every state transition triggered by user input.
//! - Recompute derived views (filtered list, counts) on read.
//!
//! # Invariants
//! - At most one edit session is active at a time.
//! - `text` of any stored todo is non-empty after trim; enforced here at the
//!   add/save boundary.
//! - Every operation is total: invalid input declines to act instead of
//!   failing.
//! - Log lines carry metadata only (ids, counts), never todo text.

use crate::model::todo::{Filter, Todo, TodoId};
use log::debug;

/// Transient state for an in-progress edit of one todo.
///
/// The working buffer is independent of the stored text until committed by
/// `save_edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Id of the todo being edited.
    pub editing_id: TodoId,
    /// Working copy of the text, replaced wholesale by `set_edit_text`.
    pub text: String,
}

/// Owns all todo application state.
///
/// Presentation layers hold `&mut TodoStore`, invoke the mutating operations
/// in response to input events, and read the accessors to render.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    edit: Option<EditSession>,
    filter: Filter,
}

impl TodoStore {
    /// Creates an empty store with filter `All` and no edit session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new todo built from `raw_text`.
    ///
    /// The text is trimmed first; whitespace-only input is silently ignored
    /// and `None` is returned. On success the new todo starts uncompleted,
    /// dated today, and its id is returned.
    pub fn add_todo(&mut self, raw_text: &str) -> Option<TodoId> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            debug!("event=todo_add module=store status=noop reason=empty_text");
            return None;
        }

        let todo = Todo::new(trimmed);
        let id = todo.id;
        self.todos.push(todo);
        debug!(
            "event=todo_add module=store status=ok id={id} total={}",
            self.todos.len()
        );
        Some(id)
    }

    /// Removes the todo matching `id`. Unknown ids are silently ignored.
    pub fn delete_todo(&mut self, id: TodoId) {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        if self.todos.len() == before {
            debug!("event=todo_delete module=store status=noop id={id}");
            return;
        }
        debug!(
            "event=todo_delete module=store status=ok id={id} total={}",
            self.todos.len()
        );
    }

    /// Flips the completion flag of the todo matching `id`. All other fields
    /// are unchanged. Unknown ids are silently ignored.
    pub fn toggle_complete(&mut self, id: TodoId) {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.toggle();
                debug!(
                    "event=todo_toggle module=store status=ok id={id} completed={}",
                    todo.completed
                );
            }
            None => debug!("event=todo_toggle module=store status=noop id={id}"),
        }
    }

    /// Starts editing the todo matching `id`, seeding the working buffer with
    /// `current_text`.
    ///
    /// Any prior in-progress session is overwritten without saving.
    pub fn start_edit(&mut self, id: TodoId, current_text: impl Into<String>) {
        if self.edit.is_some() {
            debug!("event=edit_start module=store status=ok id={id} note=prior_session_discarded");
        } else {
            debug!("event=edit_start module=store status=ok id={id}");
        }
        self.edit = Some(EditSession {
            editing_id: id,
            text: current_text.into(),
        });
    }

    /// Replaces the edit working buffer. No-op when no session is active.
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(session) = self.edit.as_mut() {
            session.text = text.into();
        }
    }

    /// Commits the edit session.
    ///
    /// A trimmed non-empty buffer replaces the target todo's text; an empty
    /// buffer discards the edit and the original text is retained. The
    /// session is cleared in every case, including when the target todo no
    /// longer exists.
    pub fn save_edit(&mut self) {
        let Some(session) = self.edit.take() else {
            debug!("event=edit_save module=store status=noop reason=no_session");
            return;
        };

        let id = session.editing_id;
        let trimmed = session.text.trim();
        if trimmed.is_empty() {
            debug!("event=edit_save module=store status=noop reason=empty_text id={id}");
            return;
        }

        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.text = trimmed.to_string();
                debug!("event=edit_save module=store status=ok id={id}");
            }
            None => {
                debug!("event=edit_save module=store status=noop reason=target_missing id={id}");
            }
        }
    }

    /// Clears the edit session without applying any change.
    pub fn cancel_edit(&mut self) {
        if self.edit.take().is_some() {
            debug!("event=edit_cancel module=store status=ok");
        }
    }

    /// Sets the active view filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        debug!(
            "event=filter_set module=store status=ok filter={}",
            filter.as_str()
        );
    }

    /// Full collection in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Subsequence of the collection matching the active filter, in
    /// collection order. Recomputed on every call.
    pub fn filtered_todos(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .collect()
    }

    /// Count of uncompleted todos.
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_active()).count()
    }

    /// Count of completed todos.
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    /// Size of the collection.
    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    /// Active view filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// In-progress edit session, if any.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }
}
