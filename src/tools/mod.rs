//! The tools module provides the helpers around the huffzip core.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - freq_count: Per-byte frequency count, parallel on large inputs.

pub mod cli;
pub mod freq_count;
