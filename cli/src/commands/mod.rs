//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function, except the
//! closely related search and extraction commands which share a module.

pub mod compare;
pub mod completions;
pub mod extract;
pub mod search;
pub mod split;
pub mod strip;
