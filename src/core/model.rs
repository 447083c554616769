//! Report model
//!
//! Every step of a patch run is recorded as a `ResultItem` before the
//! report is rendered.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Target,
    Backup,
    Patch,
    Error,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Content size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// XXH3 hash of the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Set when nothing was written to disk
    #[serde(default)]
    pub dry_run: bool,
}

impl Meta {
    /// Size and hash of a piece of file content
    pub fn for_content(content: &str) -> Self {
        Self {
            size: Some(content.len() as u64),
            hash: Some(crate::core::util::content_hash(content)),
            dry_run: false,
        }
    }
}

/// Error information for a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl ReportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One line of the run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    pub kind: Kind,

    /// Path of the file this step touched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Short human-readable description of the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Structured payload (action names, namespace, counts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    pub meta: Meta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReportError>,
}

impl ResultItem {
    fn new(kind: Kind, path: Option<String>) -> Self {
        Self {
            kind,
            path,
            excerpt: None,
            data: None,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// The gradle file being patched
    pub fn target(path: impl Into<String>) -> Self {
        Self::new(Kind::Target, Some(path.into()))
    }

    /// The pristine backup next to the target
    pub fn backup(path: impl Into<String>) -> Self {
        Self::new(Kind::Backup, Some(path.into()))
    }

    /// The outcome of the namespace check/insert
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Kind::Patch, Some(path.into()))
    }

    pub fn error(error: ReportError) -> Self {
        let mut item = Self::new(Kind::Error, None);
        item.errors.push(error);
        item
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_error(mut self, error: ReportError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Ordered collection of result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if any item carries an error
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|item| !item.errors.is_empty())
    }
}
