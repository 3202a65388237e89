//! Core utilities and shared types
//!
//! This module contains the interactive prompts used to collect generation
//! options that were not passed on the command line.

pub mod prompt;
