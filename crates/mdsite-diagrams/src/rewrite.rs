//! Regex-based rewriting of Mermaid code blocks into renderer containers.
//!
//! Markdown conversion and rustdoc both emit Mermaid sources as escaped
//! `<pre><code>` blocks. The client-side renderer expects the raw source
//! inside a `<div class="mermaid">` container, so both shapes are rewritten
//! here. Pattern matching against HTML is fragile by nature; callers go
//! through [`rewrite_diagram_blocks`] only, so the approach can be swapped
//! for a structural transformation without touching them.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches `<pre class="...mermaid..."><code>...</code></pre>` with extra
/// attributes tolerated on both tags (the shape rustdoc emits).
static PRE_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<pre[^>]*class="[^"]*mermaid[^"]*"[^>]*><code[^>]*>(.*?)</code></pre>"#)
        .unwrap()
});

/// Matches `<pre><code class="...mermaid...">...</code></pre>` (the shape
/// fenced-code conversion emits, including `language-mermaid`).
static CODE_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<pre><code[^>]*class="[^"]*mermaid[^"]*"[^>]*>(.*?)</code></pre>"#).unwrap()
});

/// Undo the HTML entity escaping applied to code block content.
///
/// Only `&lt;`, `&gt;` and `&amp;` are unescaped; the diagram renderer
/// receives everything else verbatim.
#[must_use]
pub fn unescape_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Replace every recognized Mermaid code block with a `<div class="mermaid">`
/// container holding the unescaped diagram source.
///
/// Matching is case-insensitive on the class token and spans line
/// boundaries. Code blocks for other languages, and Mermaid markup that
/// doesn't match either recognized shape, are left untouched.
#[must_use]
pub fn rewrite_diagram_blocks(html: &str) -> String {
    fn wrap(caps: &Captures<'_>) -> String {
        format!(
            "<div class=\"mermaid\">\n{}\n</div>",
            unescape_entities(&caps[1])
        )
    }

    let pass = PRE_CLASS_RE.replace_all(html, wrap);
    CODE_CLASS_RE.replace_all(&pass, wrap).into_owned()
}
