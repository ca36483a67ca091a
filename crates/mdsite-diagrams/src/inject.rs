//! Mermaid injection for externally generated HTML trees.
//!
//! Rustdoc knows nothing about Mermaid, so its output carries diagram
//! sources as plain code blocks. Injection rewrites those blocks and appends
//! the script/style pair that renders them client-side. A marker check keeps
//! repeated runs from touching already-processed files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{MERMAID_MARKER, MERMAID_SCRIPT, MERMAID_STYLE};
use crate::rewrite::rewrite_diagram_blocks;

/// Result of injecting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// The file was rewritten and persisted.
    Modified,
    /// The file already carried the marker, or injection produced identical
    /// content; nothing was written.
    AlreadyInjected,
}

/// Tree-level outcome of [`process_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStatus {
    /// At least one HTML file was found and processed.
    Processed,
    /// The root directory does not exist.
    RootNotFound,
    /// The root exists but contains no HTML files.
    NoHtmlFiles,
}

/// Summary of a [`process_tree`] run.
#[derive(Debug, Clone, Copy)]
pub struct InjectReport {
    /// Tree-level status.
    pub status: TreeStatus,
    /// Number of HTML files visited.
    pub scanned: usize,
    /// Number of files actually modified.
    pub modified: usize,
}

impl InjectReport {
    fn skipped(status: TreeStatus) -> Self {
        Self {
            status,
            scanned: 0,
            modified: 0,
        }
    }
}

/// Injection error.
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Inject Mermaid support into HTML content.
///
/// Returns `None` when the content already contains [`MERMAID_MARKER`]
/// (the idempotence guard). Otherwise rewrites diagram blocks, inserts the
/// style block before `</head>` and the script block before `</body>`
/// (falling back to `</html>`, or skipping script injection when neither
/// closing tag exists), and returns the new content.
#[must_use]
pub fn inject(html: &str) -> Option<String> {
    if html.contains(MERMAID_MARKER) {
        return None;
    }

    let mut content = rewrite_diagram_blocks(html);

    if content.contains("<head>") && !content.contains(MERMAID_STYLE) {
        content = content.replacen("</head>", &format!("{MERMAID_STYLE}</head>"), 1);
    }

    if content.contains("</body>") {
        content = content.replacen("</body>", &format!("{MERMAID_SCRIPT}</body>"), 1);
    } else if content.contains("</html>") {
        content = content.replacen("</html>", &format!("{MERMAID_SCRIPT}</html>"), 1);
    }

    Some(content)
}

/// Inject Mermaid support into a single HTML file, rewriting it in place.
///
/// The file is only written when injection actually changed its content.
pub fn inject_file(path: &Path) -> Result<InjectOutcome, InjectError> {
    let html = fs::read_to_string(path)?;

    match inject(&html) {
        Some(content) if content != html => {
            fs::write(path, content)?;
            tracing::debug!(path = %path.display(), "injected mermaid support");
            Ok(InjectOutcome::Modified)
        }
        _ => Ok(InjectOutcome::AlreadyInjected),
    }
}

/// Inject Mermaid support into every HTML file under `root`.
///
/// A missing root or an empty HTML file set is a normal skip condition,
/// reported through [`InjectReport::status`] rather than an error.
pub fn process_tree(root: &Path) -> Result<InjectReport, InjectError> {
    if !root.exists() {
        return Ok(InjectReport::skipped(TreeStatus::RootNotFound));
    }

    let mut files = Vec::new();
    collect_html_files(root, &mut files)?;
    if files.is_empty() {
        return Ok(InjectReport::skipped(TreeStatus::NoHtmlFiles));
    }

    let mut modified = 0;
    for file in &files {
        if inject_file(file)? == InjectOutcome::Modified {
            modified += 1;
        }
    }

    Ok(InjectReport {
        status: TreeStatus::Processed,
        scanned: files.len(),
        modified,
    })
}

/// Recursively collect every `.html` file under `dir`.
fn collect_html_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), InjectError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_html_files(&path, files)?;
        } else if path.extension().is_some_and(|e| e == "html") {
            files.push(path);
        }
    }
    Ok(())
}
