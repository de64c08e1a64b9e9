//! # Pagecraft Export
//!
//! Turns a Pagecraft component forest into single-file component markup.
//!
//! ```text
//! NodeStore ──export_body──▶ nested markup ──render_document──▶ .vue text
//! ```
//!
//! Export is read-only: it never touches the editor state, and exporting
//! the same forest twice yields identical text.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod shell;
pub mod template;

pub use config::{CanvasBackground, ExportConfig, ExportFormat};
pub use error::{ExportError, ExportResult};
pub use template::TemplateExporter;
