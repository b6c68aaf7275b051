//! CLI Commands
//!
//! The chpl-tasks CLI has a single command: print the selection.

mod tasks;

pub use tasks::print_tasks;
