//! bdmux - Blu-ray playlist resolver
//!
//! This library crate exposes the CLI's building blocks for integration testing.

pub mod config;
pub mod report;
mod resolve;

pub use resolve::*;
