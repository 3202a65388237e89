//! Porcelain commands (user-facing operations)
//!
//! - `generate`: append, stage and commit with backdated timestamps

pub mod generate;
