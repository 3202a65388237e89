//! Core repository components
//!
//! - `git`: external `git` process invocation
//! - `repository`: the opened working tree and its output writer
//! - `workspace`: working directory file operations

pub mod git;
pub mod repository;
pub mod workspace;
