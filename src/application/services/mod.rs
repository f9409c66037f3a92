//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on store traits (GroupStore, ExpenseStore)
//! but are themselves concrete structs, not traits.

mod expense;
mod group;

pub use expense::ExpenseService;
pub use group::GroupService;
