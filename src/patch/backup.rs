//! Pristine backup handling
//!
//! The backup is written once, from the first content ever seen, and is
//! never overwritten afterwards. Every later run restores it first.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// What happened to the backup on this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupAction {
    /// No backup existed; the current target content was copied
    Created,
    /// A backup existed and was copied back over the target
    Restored,
}

impl BackupAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackupAction::Created => "created",
            BackupAction::Restored => "restored",
        }
    }
}

/// Make sure `target` holds the pristine content and return it.
///
/// With `dry_run` nothing is written; the returned content is what the
/// target would hold after this step.
pub fn prepare_original(target: &Path, backup: &Path, dry_run: bool) -> Result<(BackupAction, String)> {
    if backup.exists() {
        let original = fs::read_to_string(backup)
            .with_context(|| format!("Failed to read backup: {:?}", backup))?;
        if !dry_run {
            fs::write(target, &original)
                .with_context(|| format!("Failed to restore backup into: {:?}", target))?;
        }
        Ok((BackupAction::Restored, original))
    } else {
        let original = fs::read_to_string(target)
            .with_context(|| format!("Failed to read: {:?}", target))?;
        if !dry_run {
            fs::write(backup, &original)
                .with_context(|| format!("Failed to create backup: {:?}", backup))?;
        }
        Ok((BackupAction::Created, original))
    }
}
