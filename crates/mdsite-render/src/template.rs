//! Fixed full-page HTML template for converted Markdown documents.

use std::fmt::Write;

/// Assemble a complete standalone HTML document around a rendered body.
///
/// The title is interpolated verbatim, with no HTML escaping. Source
/// Markdown is trusted; a title containing markup lands in the head as-is.
pub(crate) fn page_template(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 2048);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "  <title>{title}</title>");
    html.push_str(PAGE_STYLE);
    html.push_str(
        "  <script src=\"https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js\"></script>\n",
    );
    html.push_str("  <script>mermaid.initialize({startOnLoad:true});</script>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("  <div class=\"markdown-body\">\n");
    html.push_str(body);
    html.push_str("\n  </div>\n</body>\n</html>\n");

    html
}

/// Stylesheet for converted pages: typography, code, tables, blockquotes and
/// the Mermaid diagram container.
const PAGE_STYLE: &str = r"  <style>
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 1200px; margin: 0 auto; padding: 2rem; line-height: 1.6; }
    h1, h2, h3, h4, h5, h6 { color: #333; margin-top: 2rem; }
    code { background: #f5f5f5; padding: 0.2em 0.4em; border-radius: 3px; font-family: 'Monaco', 'Courier New', monospace; }
    pre { background: #f5f5f5; padding: 1rem; border-radius: 5px; overflow-x: auto; }
    pre code { background: none; padding: 0; }
    a { color: #0066cc; text-decoration: none; }
    a:hover { text-decoration: underline; }
    table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
    th, td { border: 1px solid #ddd; padding: 0.5rem; text-align: left; }
    th { background: #f5f5f5; }
    blockquote { border-left: 4px solid #ddd; padding-left: 1rem; margin-left: 0; color: #666; }
    .mermaid { text-align: center; margin: 2rem 0; }
  </style>
";
