//! Single-file component boilerplate wrapped around the generated markup.

use std::fmt::Write;

use crate::config::CanvasBackground;

/// Theme colour written into the manifest and meta hint.
pub const THEME_COLOR: &str = "#667eea";

/// Wrap `body` in the template/script/style shell.
///
/// `body` is inserted verbatim between the app container's tags and is
/// expected to be indented already.
#[must_use]
pub fn render_document(background: &CanvasBackground, body: &str, pwa: bool) -> String {
    let bg = background.declaration();
    let mut doc = String::with_capacity(body.len() + 1024);

    let _ = writeln!(doc, "<template>");
    let _ = writeln!(doc, "  <div class=\"app-container\" style=\"{bg}\">");
    if !body.is_empty() {
        let _ = writeln!(doc, "{body}");
    }
    let _ = writeln!(doc, "  </div>");
    let _ = writeln!(doc, "</template>");
    doc.push('\n');
    doc.push_str(SCRIPT_BLOCK);
    doc.push('\n');
    let _ = writeln!(doc, "<style scoped>");
    let _ = writeln!(doc, ".app-container {{");
    let _ = writeln!(doc, "  min-height: 100vh;");
    let _ = writeln!(doc, "  {bg};");
    let _ = writeln!(doc, "}}");
    let _ = writeln!(doc, "</style>");

    if pwa {
        doc.push('\n');
        doc.push_str(&render_manifest(background));
    }
    doc
}

const SCRIPT_BLOCK: &str = "<script>
export default {
  name: 'App',
  data() {
    return {
      inputValue: ''
    }
  }
}
</script>
";

/// Installable-app manifest plus the tags that link it, as comments.
#[must_use]
pub fn render_manifest(background: &CanvasBackground) -> String {
    let bg_color = background.manifest_color();
    format!(
        r#"// manifest.json
{{
  "name": "Pagecraft App",
  "short_name": "PagecraftApp",
  "start_url": "/",
  "display": "standalone",
  "background_color": "{bg_color}",
  "theme_color": "{THEME_COLOR}",
  "icons": [
    {{
      "src": "/icon-192.png",
      "sizes": "192x192",
      "type": "image/png"
    }},
    {{
      "src": "/icon-512.png",
      "sizes": "512x512",
      "type": "image/png"
    }}
  ]
}}

// In your index.html, add:
// <link rel="manifest" href="/manifest.json">
// <meta name="theme-color" content="{THEME_COLOR}">
"#
    )
}
