//! # Pagecraft Core
//!
//! Component tree model for the Pagecraft visual page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               pagecraft-core                │
//! ├─────────────────────────────────────────────┤
//! │  Node Store      │  Editor State            │
//! │  - Arena by id   │  - Add / remove          │
//! │  - Root order    │  - Style / content       │
//! │  - Queries       │  - Reparent guard        │
//! ├─────────────────────────────────────────────┤
//! │  Drag Controller │  Snapshots               │
//! │  - Idle/Dragging │  - JSON save / load      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Nodes reference each other by [`NodeId`] only. The [`EditorState`] is the
//! single writer of the [`NodeStore`] and keeps the forest acyclic with
//! consistent parent/child links after every call.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod drag;
pub mod editor;
pub mod error;
pub mod node;
pub mod store;

pub use drag::{DragController, DragState, DropOutcome};
pub use editor::{EditorState, RejectReason, ReparentOutcome, Tool};
pub use error::{BuilderError, BuilderResult};
pub use node::{
    default_styles, ComponentNode, NodeId, NodeKind, Position, StyleMap, DEFAULT_STYLES,
    NESTED_ORIGIN,
};
pub use store::NodeStore;

/// Pagecraft core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
