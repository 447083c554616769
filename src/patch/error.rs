//! Patch errors that the CLI reports with remediation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    /// The gradle file is not in the pub cache
    #[error("Package not found at: {}", path.display())]
    NotFound { path: PathBuf },

    /// No environment variable to derive the pub cache root from
    #[error("cannot locate the pub cache: {var} is not set (pass --pub-cache or set PUB_CACHE)")]
    NoCacheRoot { var: String },
}

impl PatchError {
    /// Stable code used in the rendered report
    pub fn code(&self) -> &'static str {
        match self {
            PatchError::NotFound { .. } => "NOT_FOUND",
            PatchError::NoCacheRoot { .. } => "NO_CACHE_ROOT",
        }
    }
}
