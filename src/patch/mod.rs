//! Patch module - adds the namespace declaration to a cached build.gradle
//!
//! - `backup`: pristine copy creation and restore
//! - `namespace`: detection and insertion of the declaration
//! - `run`: the end-to-end flow and its report

pub mod backup;
pub mod error;
pub mod namespace;
pub mod run;
