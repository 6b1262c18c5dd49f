//! Core state management for litetask.
//! This crate is the single source of truth for todo-list invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Filter, Todo, TodoId};
pub use store::todo_store::{EditSession, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
