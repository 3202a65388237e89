//! Command implementations
//!
//! Commands are written as `impl Repository` blocks, so they share the opened
//! working tree, its output writer and its `git` runner.

pub mod porcelain;
