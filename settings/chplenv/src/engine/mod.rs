//! Selection Engine
//!
//! Decision table and the memoizing selector built on it.

pub mod rules;
pub mod selector;
