//! Markdown tree to HTML tree conversion.

use std::fs;
use std::path::{Path, PathBuf};

use mdsite_render::PageRenderer;

/// Root-level files converted in addition to the docs tree.
///
/// Anything else at the project root is ignored; absence of a listed file is
/// a normal skip, not an error.
pub const ROOT_FILES: &[&str] = &[
    "README.md",
    "CONTRIBUTING.md",
    "DEPLOYMENT.md",
    "CHANGELOG.md",
];

/// Directory layout for a site conversion run.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    /// Markdown source tree (conventionally `docs`).
    pub source_dir: PathBuf,
    /// Output root for the generated site (conventionally `_site`).
    pub output_dir: PathBuf,
    /// Project root holding the allow-listed files (conventionally `.`).
    pub root_dir: PathBuf,
}

impl SiteLayout {
    /// Output directory for the converted docs tree.
    #[must_use]
    pub fn docs_output(&self) -> PathBuf {
        self.output_dir.join("docs")
    }
}

/// Record of one converted file.
#[derive(Debug, Clone)]
pub struct ConvertedPage {
    /// Source Markdown path.
    pub source: PathBuf,
    /// Written HTML path.
    pub output: PathBuf,
}

/// Summary of a [`SiteConverter::convert_site`] run.
#[derive(Debug)]
pub struct ConvertReport {
    /// All files converted, in traversal order.
    pub pages: Vec<ConvertedPage>,
    /// Whether the docs source directory existed.
    pub docs_dir_found: bool,
}

/// Conversion error.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts a Markdown tree into a mirrored tree of standalone HTML pages.
pub struct SiteConverter {
    renderer: PageRenderer,
}

impl SiteConverter {
    /// Create a converter with the default renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            renderer: PageRenderer::new(),
        }
    }

    /// Create a converter with a custom renderer.
    #[must_use]
    pub fn with_renderer(renderer: PageRenderer) -> Self {
        Self { renderer }
    }

    /// Convert a single Markdown file, creating parent directories as needed.
    pub fn convert_file(&self, source: &Path, output: &Path) -> Result<ConvertedPage, ConvertError> {
        let markdown = fs::read_to_string(source)?;
        let page = self.renderer.render_page(&markdown);

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, page.html)?;
        tracing::debug!(source = %source.display(), output = %output.display(), "converted page");

        Ok(ConvertedPage {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
        })
    }

    /// Convert every `.md` file under `source_dir` into a mirrored `.html`
    /// tree under `output_dir`.
    ///
    /// A missing source directory yields an empty result. Conversion is not
    /// transactional: an I/O error propagates immediately and leaves files
    /// written so far in place.
    pub fn convert_tree(
        &self,
        source_dir: &Path,
        output_dir: &Path,
    ) -> Result<Vec<ConvertedPage>, ConvertError> {
        let mut pages = Vec::new();
        if source_dir.exists() {
            self.convert_dir(source_dir, output_dir, &mut pages)?;
        }
        Ok(pages)
    }

    fn convert_dir(
        &self,
        dir: &Path,
        out_dir: &Path,
        pages: &mut Vec<ConvertedPage>,
    ) -> Result<(), ConvertError> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                self.convert_dir(&path, &out_dir.join(entry.file_name()), pages)?;
            } else if path.extension().is_some_and(|e| e == "md") {
                let output = out_dir.join(entry.file_name()).with_extension("html");
                pages.push(self.convert_file(&path, &output)?);
            }
        }
        Ok(())
    }

    /// Convert the docs tree and the allow-listed root files.
    ///
    /// The docs tree lands under `<output>/docs`; root files land flat in
    /// `<output>` with their extension swapped. Absent inputs are skipped.
    pub fn convert_site(&self, layout: &SiteLayout) -> Result<ConvertReport, ConvertError> {
        let docs_dir_found = layout.source_dir.exists();
        let mut pages = self.convert_tree(&layout.source_dir, &layout.docs_output())?;

        for name in ROOT_FILES {
            let source = layout.root_dir.join(name);
            if !source.exists() {
                continue;
            }
            let output = layout.output_dir.join(Path::new(name).with_extension("html"));
            pages.push(self.convert_file(&source, &output)?);
        }

        Ok(ConvertReport {
            pages,
            docs_dir_found,
        })
    }
}

impl Default for SiteConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_convert_file_writes_page() {
        let dir = create_test_dir();
        let source = dir.path().join("guide.md");
        let output = dir.path().join("out/guide.html");
        fs::write(&source, "# Guide\n\nSome text").unwrap();

        let page = SiteConverter::new().convert_file(&source, &output).unwrap();

        assert_eq!(page.source, source);
        assert_eq!(page.output, output);
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>Guide</title>"));
        assert!(html.contains("Some text"));
    }

    #[test]
    fn test_convert_tree_mirrors_structure() {
        let dir = create_test_dir();
        let source = dir.path().join("docs");
        let nested = source.join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(source.join("index.md"), "# Home").unwrap();
        fs::write(nested.join("c.md"), "# Nested").unwrap();

        let out = dir.path().join("out");
        let pages = SiteConverter::new().convert_tree(&source, &out).unwrap();

        assert_eq!(pages.len(), 2);
        assert!(out.join("index.html").exists());
        assert!(out.join("a/b/c.html").exists());
    }

    #[test]
    fn test_convert_tree_skips_non_markdown() {
        let dir = create_test_dir();
        let source = dir.path().join("docs");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("page.md"), "# Page").unwrap();
        fs::write(source.join("diagram.png"), [0u8; 4]).unwrap();
        fs::write(source.join("notes.txt"), "not markdown").unwrap();

        let out = dir.path().join("out");
        let pages = SiteConverter::new().convert_tree(&source, &out).unwrap();

        assert_eq!(pages.len(), 1);
        assert!(out.join("page.html").exists());
        assert!(!out.join("diagram.html").exists());
        assert!(!out.join("notes.html").exists());
    }

    #[test]
    fn test_convert_tree_missing_source_is_empty() {
        let dir = create_test_dir();
        let pages = SiteConverter::new()
            .convert_tree(&dir.path().join("missing"), &dir.path().join("out"))
            .unwrap();
        assert!(pages.is_empty());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_convert_tree_existing_output_dirs_are_fine() {
        let dir = create_test_dir();
        let source = dir.path().join("docs");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("page.md"), "# Page").unwrap();

        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();

        let converter = SiteConverter::new();
        converter.convert_tree(&source, &out).unwrap();
        // Second run overwrites in place without erroring.
        let pages = converter.convert_tree(&source, &out).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_convert_site_docs_and_root_files() {
        let dir = create_test_dir();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("setup.md"), "# Setup").unwrap();
        fs::write(dir.path().join("README.md"), "# Readme").unwrap();
        fs::write(dir.path().join("CHANGELOG.md"), "# Changes").unwrap();

        let layout = SiteLayout {
            source_dir: docs,
            output_dir: dir.path().join("_site"),
            root_dir: dir.path().to_path_buf(),
        };
        let report = SiteConverter::new().convert_site(&layout).unwrap();

        assert!(report.docs_dir_found);
        assert_eq!(report.pages.len(), 3);
        assert!(dir.path().join("_site/docs/setup.html").exists());
        assert!(dir.path().join("_site/README.html").exists());
        assert!(dir.path().join("_site/CHANGELOG.html").exists());
    }

    #[test]
    fn test_convert_site_allow_list_exactness() {
        let dir = create_test_dir();
        fs::write(dir.path().join("README.md"), "# Readme").unwrap();
        fs::write(dir.path().join("LICENSE.md"), "# License").unwrap();

        let layout = SiteLayout {
            source_dir: dir.path().join("docs"),
            output_dir: dir.path().join("_site"),
            root_dir: dir.path().to_path_buf(),
        };
        let report = SiteConverter::new().convert_site(&layout).unwrap();

        assert!(!report.docs_dir_found);
        assert_eq!(report.pages.len(), 1);
        assert!(dir.path().join("_site/README.html").exists());
        assert!(!dir.path().join("_site/LICENSE.html").exists());
    }

    #[test]
    fn test_convert_site_absent_root_files_skipped() {
        let dir = create_test_dir();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("only.md"), "# Only").unwrap();

        let layout = SiteLayout {
            source_dir: docs,
            output_dir: dir.path().join("_site"),
            root_dir: dir.path().to_path_buf(),
        };
        let report = SiteConverter::new().convert_site(&layout).unwrap();

        assert_eq!(report.pages.len(), 1);
        assert!(dir.path().join("_site/docs/only.html").exists());
    }

    #[test]
    fn test_converted_mermaid_block_in_tree() {
        let dir = create_test_dir();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(
            docs.join("arch.md"),
            "# Architecture\n\n```mermaid\ngraph TD\nA --> B\n```\n",
        )
        .unwrap();

        let out = dir.path().join("out");
        SiteConverter::new().convert_tree(&docs, &out).unwrap();

        let html = fs::read_to_string(out.join("arch.html")).unwrap();
        assert!(html.contains(r#"<div class="mermaid">"#));
        assert!(html.contains("A --> B"));
    }
}
