//! Core module - shared data structures and utilities
//!
//! This module provides:
//! - Report model (ResultItem)
//! - Rendering functions for different output formats
//! - Pub cache path resolution
//! - Console status lines
//! - Common utilities

pub mod model;
pub mod paths;
pub mod render;
pub mod status;
pub mod util;
