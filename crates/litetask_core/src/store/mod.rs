//! Store layer owning all mutable application state.
//!
//! # Responsibility
//! - Expose the only operations that may mutate the todo collection,
//!   edit session, and filter.
//! - Keep presentation layers limited to read accessors plus these
//!   operations.
//!
//! # Invariants
//! - Invalid input (empty text, unknown id) is a silent no-op, never an
//!   error.
//! - Collection order is insertion order; edits and toggles never reorder.

pub mod todo_store;
