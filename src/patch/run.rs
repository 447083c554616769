//! Patch flow: locate → backup or restore → patch → report

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

use crate::core::model::{Meta, ReportError, ResultItem, ResultSet};
use crate::core::paths::{backup_path, display_path};
use crate::core::status::Status;
use crate::patch::backup::{prepare_original, BackupAction};
use crate::patch::error::PatchError;
use crate::patch::namespace::{count_namespace, has_namespace, insert_namespace};

/// Inputs for one patch run
#[derive(Debug, Clone)]
pub struct PatchOptions {
    pub target: PathBuf,
    pub namespace: String,
    pub dry_run: bool,
}

/// Result of the namespace step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The original already declares the namespace
    AlreadyConfigured,
    /// The declaration was inserted after `android {`
    Added,
    /// The original has no `android {` block; left as is
    AnchorMissing,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::AlreadyConfigured => "already_configured",
            Outcome::Added => "added",
            Outcome::AnchorMissing => "anchor_missing",
        }
    }
}

/// Everything a run did
#[derive(Debug, Clone)]
pub struct PatchReport {
    pub backup_action: BackupAction,
    pub outcome: Outcome,
    /// Content of the target after the run (or what it would be in a dry run)
    pub content: String,
    pub result_set: ResultSet,
}

/// Run the patch against `options.target`.
///
/// Fails with [`PatchError::NotFound`] before touching the disk when the
/// target does not exist.
pub fn apply(options: &PatchOptions, status: &Status) -> Result<PatchReport> {
    let target = &options.target;
    if !target.is_file() {
        return Err(PatchError::NotFound {
            path: target.clone(),
        }
        .into());
    }

    let target_str = display_path(target);
    let backup = backup_path(target);
    let backup_str = display_path(&backup);
    let mut result_set = ResultSet::new();

    status.info(format!("Found package at: {}", target_str));
    status.blank();
    result_set.push(ResultItem::target(&target_str).with_excerpt("found"));

    status.step(if backup.exists() {
        "Restoring from backup..."
    } else {
        "Creating backup..."
    });
    let (backup_action, original) = prepare_original(target, &backup, options.dry_run)?;
    match backup_action {
        BackupAction::Created => status.success("Backup created."),
        BackupAction::Restored => status.success("Restored from backup."),
    }
    status.debug(format!(
        "backup: {} ({} bytes, xxh3 {})",
        backup_str,
        original.len(),
        crate::core::util::content_hash(&original)
    ));
    status.blank();

    let mut backup_meta = Meta::for_content(&original);
    backup_meta.dry_run = options.dry_run;
    result_set.push(
        ResultItem::backup(&backup_str)
            .with_excerpt(backup_action.as_str())
            .with_meta(backup_meta)
            .with_data(json!({ "action": backup_action.as_str() })),
    );

    let (outcome, content) = if has_namespace(&original, &options.namespace)? {
        status.success("Namespace already properly configured!");
        (Outcome::AlreadyConfigured, original)
    } else {
        status.step("Adding namespace to build.gradle...");
        match insert_namespace(&original, &options.namespace) {
            Some(patched) => {
                if !options.dry_run {
                    fs::write(target, &patched)
                        .with_context(|| format!("Failed to write: {:?}", target))?;
                }
                status.success("Namespace added successfully!");
                (Outcome::Added, patched)
            }
            None => {
                status.warn("No `android {` block found; build.gradle left unchanged.");
                (Outcome::AnchorMissing, original)
            }
        }
    };

    let mut patch_meta = Meta::for_content(&content);
    patch_meta.dry_run = options.dry_run;
    let mut patch_item = ResultItem::patch(&target_str)
        .with_excerpt(outcome.as_str())
        .with_meta(patch_meta)
        .with_data(json!({
            "outcome": outcome.as_str(),
            "namespace": options.namespace,
            "declarations": count_namespace(&content, &options.namespace)?,
        }));
    if outcome == Outcome::AnchorMissing {
        patch_item = patch_item.with_error(ReportError::new(
            "NO_ANCHOR",
            format!("no `android {{` block in {}", target_str),
        ));
    }
    result_set.push(patch_item);

    Ok(PatchReport {
        backup_action,
        outcome,
        content,
        result_set,
    })
}
