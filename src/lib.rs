//! fork-pulse crate
//!
//! This crate is an implementation detail of the `fork-pulse` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.
//
// # Module Organization
//
// - [`commands`]: Command-line interface and the run state machine
// - [`config`]: Configuration file and repository identifiers
// - [`facts`]: Data collection from the hosting API
// - [`metrics`]: Daily aggregation and trend analysis
// - [`reports`]: Chart rendering and dashboard generation

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod facts;

#[doc(hidden)]
pub mod metrics;

#[doc(hidden)]
pub mod misc;

#[doc(hidden)]
pub mod reports;

pub use crate::commands::{Host, run};
