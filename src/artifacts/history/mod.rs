//! Commit history planning
//!
//! - `date_range`: inclusive calendar range and day arithmetic
//! - `timestamp`: a single generated commit instant and what is derived from it
//! - `sampler`: uniform random timestamps over a range
//! - `request`: raw options and the validated generation request
//! - `error`: the error kinds a run can end with

pub mod date_range;
pub mod error;
pub mod request;
pub mod sampler;
pub mod timestamp;
