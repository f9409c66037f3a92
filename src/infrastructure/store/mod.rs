//! Store implementations
//!
//! - `json`: whole-file JSON arrays on disk (read everything, append, overwrite)
//! - `memory`: lock-protected vectors, for tests and embedding

mod json;
mod memory;

pub use json::{JsonExpenseStore, JsonGroupStore};
pub use memory::{InMemoryExpenseStore, InMemoryGroupStore};
