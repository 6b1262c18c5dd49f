//! Domain model for the todo core.
//!
//! # Responsibility
//! - Define the canonical task record and the view filter.
//! - Keep one shape shared by store logic and every presentation layer.
//!
//! # Invariants
//! - Every todo is identified by a stable `TodoId`.
//! - Collection membership implies non-empty trimmed text; this is enforced
//!   at the store's create/edit boundary, not inside the model.

pub mod todo;
