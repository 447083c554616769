//! Namespace detection and insertion
//!
//! The build file is treated as plain text. The declaration is recognised
//! as `namespace "<ns>"` (either quote style) and inserted right after the
//! first `android {` opener.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening of the `android { ... }` block
pub static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"android\s*\{").expect("Invalid ANCHOR_RE regex"));

/// Indentation of the inserted declaration
const INDENT: &str = "    ";

fn declaration_re(namespace: &str) -> Result<Regex> {
    let pattern = format!(r#"namespace\s+["']{}["']"#, regex::escape(namespace));
    Regex::new(&pattern).with_context(|| format!("Invalid namespace pattern for {}", namespace))
}

/// The line that gets inserted
pub fn declaration_line(namespace: &str) -> String {
    format!("{}namespace \"{}\"", INDENT, namespace)
}

/// Whether the content already declares `namespace`
pub fn has_namespace(content: &str, namespace: &str) -> Result<bool> {
    Ok(declaration_re(namespace)?.is_match(content))
}

/// Number of declarations of `namespace` in the content
pub fn count_namespace(content: &str, namespace: &str) -> Result<usize> {
    Ok(declaration_re(namespace)?.find_iter(content).count())
}

/// Whether the content has an `android {` block to anchor on
#[allow(dead_code)]
pub fn has_anchor(content: &str) -> bool {
    ANCHOR_RE.is_match(content)
}

/// Insert the declaration after the first anchor.
///
/// Returns `None` when there is no anchor.
pub fn insert_namespace(content: &str, namespace: &str) -> Option<String> {
    let anchor = ANCHOR_RE.find(content)?;
    let line = declaration_line(namespace);

    let mut patched = String::with_capacity(content.len() + line.len() + 2);
    patched.push_str(&content[..anchor.end()]);
    patched.push('\n');
    patched.push_str(&line);
    patched.push('\n');
    patched.push_str(&content[anchor.end()..]);
    Some(patched)
}
