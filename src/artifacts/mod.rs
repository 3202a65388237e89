//! Data structures and helpers
//!
//! - `core`: interactive input collection
//! - `history`: date ranges, commit timestamps and their sampling

pub mod core;
pub mod history;
