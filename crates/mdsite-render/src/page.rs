//! Markdown to standalone HTML page rendering.

use mdsite_diagrams::rewrite_diagram_blocks;
use pulldown_cmark::{Options, Parser, html};

use crate::template::page_template;

/// Title used when the source has no top-level heading.
pub const DEFAULT_TITLE: &str = "Documentation";

/// A fully assembled HTML document.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// Complete HTML document text.
    pub html: String,
    /// Page title, extracted from the first `# ` heading or the default.
    pub title: String,
}

/// Renders Markdown into standalone HTML pages.
///
/// Tables and fenced code blocks are always enabled; GFM extras
/// (strikethrough, task lists) are on by default and can be disabled with
/// [`with_gfm`](Self::with_gfm).
pub struct PageRenderer {
    gfm: bool,
}

impl PageRenderer {
    /// Create a renderer with GFM extras enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GFM extras (strikethrough, task lists).
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::ENABLE_TABLES
        }
    }

    /// Convert Markdown to body HTML with diagram blocks rewritten.
    #[must_use]
    pub fn render_body(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut body, parser);
        rewrite_diagram_blocks(&body)
    }

    /// Render Markdown into a complete standalone HTML document.
    #[must_use]
    pub fn render_page(&self, markdown: &str) -> RenderedPage {
        let title = extract_title(markdown).unwrap_or_else(|| DEFAULT_TITLE.to_owned());
        let body = self.render_body(markdown);
        RenderedPage {
            html: page_template(&title, &body),
            title,
        }
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the page title from the first `# ` heading line.
///
/// Scans raw Markdown lines in order; the marker and surrounding whitespace
/// are stripped. Returns `None` when no such line exists.
#[must_use]
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# ").map(|rest| rest.trim().to_owned()))
}
