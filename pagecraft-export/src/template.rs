//! Forest to template markup.
//!
//! Roots are emitted in canvas order and children in their stored order,
//! one indent step deeper per level. The walk is plain recursion; depth is
//! bounded by the forest, which the editor keeps acyclic.

use std::fmt::Write;

use pagecraft_core::{ComponentNode, EditorState, NodeKind, NodeStore, StyleMap};

use crate::config::{ExportConfig, ExportFormat};
use crate::shell;

/// Style values dropped from the inline `style` attribute.
pub const SKIPPED_STYLE_VALUES: &[&str] = &["auto", "0px", "none"];

/// Variable the exported inputs bind to with `v-model`.
pub const INPUT_BINDING: &str = "inputValue";

/// Exports a [`NodeStore`] as template markup.
#[derive(Debug, Clone, Default)]
pub struct TemplateExporter {
    config: ExportConfig,
}

impl TemplateExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export an editor session in the given format.
    #[must_use]
    pub fn export(&self, editor: &EditorState, format: ExportFormat) -> String {
        match format {
            ExportFormat::Template => self.export_document(editor.store()),
            ExportFormat::Body => self.export_body(editor.store()),
        }
    }

    /// The full single-file component.
    #[must_use]
    pub fn export_document(&self, store: &NodeStore) -> String {
        let body = self.export_body(store);
        let doc = shell::render_document(&self.config.background, &body, self.config.pwa);
        tracing::debug!(nodes = store.len(), bytes = doc.len(), "Exported template");
        doc
    }

    /// Only the markup generated from the forest, one root per line group.
    #[must_use]
    pub fn export_body(&self, store: &NodeStore) -> String {
        let mut out = String::with_capacity(store.len() * 256);
        for (i, root) in store.roots().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_node(&mut out, store, root, self.config.base_indent);
        }
        out
    }

    fn render_node(&self, out: &mut String, store: &NodeStore, node: &ComponentNode, indent: usize) {
        let pad = " ".repeat(indent);
        let tag = node.kind.tag();
        let style = style_attribute(&node.styles);

        let _ = write!(out, "{pad}<{tag}");
        if !style.is_empty() {
            let _ = write!(out, " style=\"{style}\"");
        }

        if node.kind == NodeKind::Select {
            out.push_str(">\n");
            let option_pad = " ".repeat(indent + self.config.indent_step);
            for option in select_options(&node.content) {
                let _ = writeln!(out, "{option_pad}<option value=\"{option}\">{option}</option>");
            }
            let _ = write!(out, "{pad}</{tag}>");
            return;
        }

        if node.kind.is_container() && !node.children.is_empty() {
            out.push_str(">\n");
            for child in store.children_of(node.id) {
                self.render_node(out, store, child, indent + self.config.indent_step);
                out.push('\n');
            }
            let _ = write!(out, "{pad}</{tag}>");
            return;
        }

        let content = &node.content;
        match node.kind {
            NodeKind::Image => {
                let _ = write!(out, " src=\"{content}\" alt=\"{content}\" />");
            }
            NodeKind::Input => {
                let _ = write!(out, " placeholder=\"{content}\" v-model=\"{INPUT_BINDING}\" />");
            }
            _ => {
                let _ = write!(out, ">{content}</{tag}>");
            }
        }
    }
}

/// Serialize styles as `kebab-key: value` pairs joined by `; `, skipping
/// [`SKIPPED_STYLE_VALUES`].
#[must_use]
pub fn style_attribute(styles: &StyleMap) -> String {
    styles
        .iter()
        .filter(|(_, value)| !SKIPPED_STYLE_VALUES.contains(&value.as_str()))
        .map(|(key, value)| format!("{}: {value}", kebab_case(key)))
        .collect::<Vec<_>>()
        .join("; ")
}

/// `backgroundColor` → `background-color`.
#[must_use]
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Split a select node's content into trimmed option labels.
pub fn select_options(content: &str) -> impl Iterator<Item = &str> {
    content.split(',').map(str::trim)
}
