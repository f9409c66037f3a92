//! warikan: shared expense tracking and settlement for groups.
//!
//! Layers, leaves first:
//! - [`domain`]: entities, validation and the settlement engine (pure)
//! - [`application`]: group and expense services over injectable stores
//! - [`infrastructure`]: store traits and implementations, DI container
//! - [`cli`]: argument model and command dispatch for the `warikan` binary

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
