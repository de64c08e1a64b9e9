//! Integration tests for template export (pagecraft-export).
//!
//! Covers full documents, determinism, ordering after drag/drop, and the
//! manifest toggle.

use pagecraft_core::{EditorState, NodeId, NodeKind, Position};
use pagecraft_export::{CanvasBackground, ExportConfig, ExportFormat, TemplateExporter};

/// Add a node with every style value set to `none`, so it exports without a
/// `style` attribute.
fn plain(editor: &mut EditorState, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
    let id = editor.add(kind, Position::default(), parent).expect("add");
    let keys: Vec<String> = editor
        .node(id)
        .map(|n| n.styles.keys().cloned().collect())
        .unwrap_or_default();
    for key in keys {
        editor.update_style(id, &key, "none");
    }
    id
}

// ==========================================================================
// Document shell
// ==========================================================================

#[test]
fn test_full_document_layout() {
    let mut editor = EditorState::new();
    let div = plain(&mut editor, NodeKind::Div, None);
    plain(&mut editor, NodeKind::Heading, Some(div));

    let exporter = TemplateExporter::with_defaults();
    let doc = exporter.export(&editor, ExportFormat::Template);

    let expected_head = "<template>\n  <div class=\"app-container\" style=\"background-color: #ffffff\">\n    <div>\n      <h1>Heading</h1>\n    </div>\n  </div>\n</template>\n";
    assert!(doc.starts_with(expected_head), "{doc}");
    assert!(doc.contains("<script>\nexport default {\n  name: 'App',"));
    assert!(doc.contains("<style scoped>\n.app-container {\n  min-height: 100vh;\n  background-color: #ffffff;\n}\n</style>"));
}

#[test]
fn test_roots_level_with_app_container() {
    let mut editor = EditorState::new();
    let div = plain(&mut editor, NodeKind::Div, None);
    plain(&mut editor, NodeKind::Span, Some(div));

    let exporter = TemplateExporter::new(ExportConfig {
        base_indent: 2,
        ..ExportConfig::default()
    });
    let doc = exporter.export(&editor, ExportFormat::Template);
    assert!(
        doc.contains("style=\"background-color: #ffffff\">\n  <div>\n    <span>Inline text</span>\n  </div>\n  </div>"),
        "{doc}"
    );
}

#[test]
fn test_body_format_skips_shell() {
    let mut editor = EditorState::new();
    plain(&mut editor, NodeKind::Paragraph, None);

    let exporter = TemplateExporter::with_defaults();
    assert_eq!(
        exporter.export(&editor, ExportFormat::Body),
        "    <p>Paragraph text</p>"
    );
}

#[test]
fn test_gradient_background_and_manifest() {
    let mut editor = EditorState::new();
    plain(&mut editor, NodeKind::Span, None);

    let exporter = TemplateExporter::new(ExportConfig {
        background: CanvasBackground::Gradient(
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)".to_string(),
        ),
        pwa: true,
        ..ExportConfig::default()
    });
    let doc = exporter.export(&editor, ExportFormat::Template);

    assert!(doc.contains("style=\"background: linear-gradient(135deg, #667eea 0%, #764ba2 100%)\""));
    assert!(doc.contains("// manifest.json"));
    assert!(doc.contains("\"display\": \"standalone\""));
    assert!(doc.contains("<link rel=\"manifest\" href=\"/manifest.json\">"));
}

#[test]
fn test_empty_forest_exports_bare_shell() {
    let editor = EditorState::new();
    let doc = TemplateExporter::with_defaults().export(&editor, ExportFormat::Template);
    assert!(doc.starts_with("<template>\n  <div class=\"app-container\" style=\"background-color: #ffffff\">\n  </div>\n</template>"));
}

// ==========================================================================
// Ordering and determinism
// ==========================================================================

#[test]
fn test_export_is_deterministic() {
    let mut editor = EditorState::new();
    for kind in NodeKind::ALL {
        editor.add(kind, Position::new(5.0, 5.0), None).expect("add");
    }
    let exporter = TemplateExporter::with_defaults();
    let first = exporter.export(&editor, ExportFormat::Template);
    let second = exporter.export(&editor, ExportFormat::Template);
    assert_eq!(first, second);
}

#[test]
fn test_children_follow_stored_order_after_drop() {
    let mut editor = EditorState::new();
    let target = plain(&mut editor, NodeKind::Container, None);
    let late = plain(&mut editor, NodeKind::Button, None);
    let early = plain(&mut editor, NodeKind::Span, Some(target));

    // `late` has the lower id but lands after `early` in the container.
    assert!(editor.reparent(late, target).is_moved());
    assert!(late < early);

    let exporter = TemplateExporter::new(ExportConfig {
        base_indent: 0,
        ..ExportConfig::default()
    });
    assert_eq!(
        exporter.export(&editor, ExportFormat::Body),
        "<div>\n  <span>Inline text</span>\n  <button>Click me</button>\n</div>"
    );
}

#[test]
fn test_select_scenario_from_options_list() {
    let mut editor = EditorState::new();
    let select = plain(&mut editor, NodeKind::Select, None);
    editor.update_content(select, "A,B,C");

    let body = TemplateExporter::with_defaults().export(&editor, ExportFormat::Body);
    let options: Vec<_> = body
        .lines()
        .filter(|l| l.trim_start().starts_with("<option"))
        .map(str::trim)
        .collect();
    assert_eq!(
        options,
        vec![
            "<option value=\"A\">A</option>",
            "<option value=\"B\">B</option>",
            "<option value=\"C\">C</option>",
        ]
    );
}

#[test]
fn test_default_styles_are_emitted_kebab_cased() {
    let mut editor = EditorState::new();
    let id = editor.add(NodeKind::Button, Position::default(), None).expect("add");
    editor.update_style(id, "boxShadow", "0 1px 2px #000");

    let body = TemplateExporter::with_defaults().export(&editor, ExportFormat::Body);
    assert!(body.starts_with("    <button style=\"background-color: #ffffff; color: #000000;"));
    assert!(body.contains("box-shadow: 0 1px 2px #000"));
    assert!(body.contains("min-width: 50px"));
    assert!(body.ends_with(">Click me</button>"));
}

#[test]
fn test_children_of_leaf_kinds_are_not_exported() {
    let mut editor = EditorState::new();
    let button = plain(&mut editor, NodeKind::Button, None);
    plain(&mut editor, NodeKind::Span, Some(button));

    let body = TemplateExporter::with_defaults().export(&editor, ExportFormat::Body);
    assert_eq!(body, "    <button>Click me</button>");
}
