//! Mermaid script and style blocks.

/// Marker substring identifying an already-injected document.
///
/// The versioned CDN URL in [`MERMAID_SCRIPT`] contains this marker, so its
/// presence means a previous injector run already processed the file.
pub const MERMAID_MARKER: &str = "mermaid@10";

/// Script block appended to generated rustdoc pages.
///
/// Uses `securityLevel: 'loose'` so diagrams with click handlers render, and
/// calls `mermaid.run()` explicitly because rustdoc pages may finish loading
/// before the script tag is evaluated.
pub const MERMAID_SCRIPT: &str = r#"<script src="https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js"></script>
<script>
  mermaid.initialize({ startOnLoad: true, theme: 'default', securityLevel: 'loose' });
  mermaid.run();
</script>"#;

/// Style block for the diagram container on rustdoc pages.
///
/// The white background and minimum height keep diagrams legible against
/// rustdoc's themed backgrounds while the renderer is still loading.
pub const MERMAID_STYLE: &str = r"<style>
  .mermaid { text-align: center; margin: 2rem 0; background: #fff; padding: 1rem; border-radius: 5px; min-height: 2rem; }
</style>";
