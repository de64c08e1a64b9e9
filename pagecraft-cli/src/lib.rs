//! # Pagecraft CLI
//!
//! Headless host for the Pagecraft builder. It replays a gesture script
//! through the editor, exports the resulting page, and saves the file.
//!
//! ## Components
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `HostConfig` - Resolved configuration for one run
//! - [`script`] - Gesture script format and replay
//! - [`run`] - Load, replay, export, write

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

pub mod script;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pagecraft_core::EditorState;
use pagecraft_export::{CanvasBackground, ExportConfig, ExportFormat, TemplateExporter};

pub use script::{ReplaySummary, Step};

/// Default name of the exported file.
pub const DEFAULT_OUTPUT: &str = "app-component.vue";

/// Command-line arguments for pagecraft.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagecraft")]
#[command(about = "Replay a Pagecraft gesture script and export the page")]
#[command(version)]
pub struct CliArgs {
    /// JSON gesture script to replay
    #[arg(env = "PAGECRAFT_SCRIPT")]
    pub script: PathBuf,

    /// Output file, or `-` for stdout
    #[arg(long, short, env = "PAGECRAFT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Page background: solid:<color>, gradient:<css> or image:<url>
    #[arg(long, env = "PAGECRAFT_BACKGROUND", default_value = "solid:#ffffff")]
    pub background: CanvasBackground,

    /// Append an installable-app manifest to the export
    #[arg(long, env = "PAGECRAFT_PWA")]
    pub pwa: bool,

    /// What to emit: `template` or `body`
    #[arg(long, env = "PAGECRAFT_FORMAT", default_value = "template")]
    pub format: ExportFormat,

    /// Start from a saved editor snapshot instead of an empty canvas
    #[arg(long, env = "PAGECRAFT_RESUME")]
    pub resume: Option<PathBuf>,

    /// Write the editor snapshot here after replay
    #[arg(long, env = "PAGECRAFT_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,
}

/// Where the export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output.
    Stdout,
    /// A file on disk.
    File(PathBuf),
}

impl From<&str> for OutputTarget {
    fn from(value: &str) -> Self {
        if value == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

/// Host configuration for one run.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Gesture script path.
    pub script: PathBuf,
    /// Export destination.
    pub output: OutputTarget,
    /// Exporter settings.
    pub export: ExportConfig,
    /// Export format.
    pub format: ExportFormat,
    /// Snapshot to resume from.
    pub resume: Option<PathBuf>,
    /// Snapshot to write after replay.
    pub snapshot: Option<PathBuf>,
}

impl From<CliArgs> for HostConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            script: args.script,
            output: OutputTarget::from(args.output.as_str()),
            export: ExportConfig {
                background: args.background,
                pwa: args.pwa,
                ..ExportConfig::default()
            },
            format: args.format,
            resume: args.resume,
            snapshot: args.snapshot,
        }
    }
}

/// Replay the configured script and write the export.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written, the script or
/// snapshot is malformed, or a step fails.
pub fn run(config: &HostConfig) -> anyhow::Result<ReplaySummary> {
    let mut editor = match &config.resume {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
            EditorState::from_json(&json)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))?
        }
        None => EditorState::new(),
    };

    let text = std::fs::read_to_string(&config.script)
        .with_context(|| format!("Failed to read script {}", config.script.display()))?;
    let steps = script::parse(&text)?;
    tracing::info!(steps = steps.len(), script = %config.script.display(), "Replaying script");

    let summary = script::replay(&mut editor, &steps)?;
    tracing::info!(
        applied = summary.applied,
        refused = summary.refused,
        nodes = editor.store().len(),
        "Replay finished"
    );

    let exporter = TemplateExporter::new(config.export.clone());
    let markup = exporter.export(&editor, config.format);
    match &config.output {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(markup.as_bytes())
                .context("Failed to write export to stdout")?;
        }
        OutputTarget::File(path) => {
            std::fs::write(path, &markup)
                .with_context(|| format!("Failed to write export {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = markup.len(), "Wrote export");
        }
    }

    if let Some(path) = &config.snapshot {
        std::fs::write(path, editor.to_json()?)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote snapshot");
    }

    Ok(summary)
}
