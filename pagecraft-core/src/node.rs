//! Component nodes - the building blocks of a page.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered style declarations, property name to raw value.
pub type StyleMap = IndexMap<String, String>;

/// Offset applied to a node when it is dropped into a container.
///
/// Nested nodes are laid out by their parent's flow, so this value only
/// matters again if the node is later promoted back to a root.
pub const NESTED_ORIGIN: Position = Position { x: 10.0, y: 10.0 };

/// Style declarations every new node starts with.
pub const DEFAULT_STYLES: &[(&str, &str)] = &[
    ("backgroundColor", "#ffffff"),
    ("color", "#000000"),
    ("padding", "10px"),
    ("margin", "5px"),
    ("borderWidth", "1px"),
    ("borderStyle", "solid"),
    ("borderColor", "#cccccc"),
    ("borderRadius", "4px"),
    ("boxShadow", "none"),
    ("zIndex", "0"),
    ("width", "auto"),
    ("height", "auto"),
    ("minWidth", "50px"),
    ("minHeight", "30px"),
    ("display", "block"),
    ("flexDirection", "row"),
    ("justifyContent", "flex-start"),
    ("alignItems", "flex-start"),
    ("flexWrap", "nowrap"),
    ("gap", "0px"),
    ("position", "relative"),
];

/// Build a fresh copy of [`DEFAULT_STYLES`].
#[must_use]
pub fn default_styles() -> StyleMap {
    DEFAULT_STYLES
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Unique identifier for a node.
///
/// Identifiers are allocated monotonically by the editor starting at 1 and
/// are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of node kinds the builder can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Block container (`div`).
    Div,
    /// Clickable button.
    Button,
    /// Text input field.
    Input,
    /// Paragraph of text (`p`).
    Paragraph,
    /// Top-level heading (`h1`).
    Heading,
    /// Image; content is the source URL.
    Image,
    /// Unordered list (`ul`).
    List,
    /// Inline text run.
    Span,
    /// Drop-down; content is a comma-separated option list.
    Select,
    /// Generic slot container, exported as a `div`.
    Container,
}

impl NodeKind {
    /// Every kind, in toolbar order.
    pub const ALL: [Self; 10] = [
        Self::Div,
        Self::Button,
        Self::Input,
        Self::Paragraph,
        Self::Heading,
        Self::Image,
        Self::List,
        Self::Span,
        Self::Select,
        Self::Container,
    ];

    /// Whether nodes of this kind accept children.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Div | Self::Container)
    }

    /// Short name shown on the toolbar.
    #[must_use]
    pub const fn tool_name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Button => "button",
            Self::Input => "input",
            Self::Paragraph => "p",
            Self::Heading => "h1",
            Self::Image => "img",
            Self::List => "ul",
            Self::Span => "span",
            Self::Select => "select",
            Self::Container => "container",
        }
    }

    /// Markup tag emitted for this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        if self.is_container() {
            "div"
        } else {
            self.tool_name()
        }
    }

    /// Content a freshly placed node of this kind starts with.
    #[must_use]
    pub const fn default_content(self) -> &'static str {
        match self {
            Self::Div => "Container",
            Self::Button => "Click me",
            Self::Input => "",
            Self::Paragraph => "Paragraph text",
            Self::Heading => "Heading",
            Self::Image => "https://via.placeholder.com/150",
            Self::List => "List item",
            Self::Span => "Inline text",
            Self::Select => "Option 1,Option 2,Option 3",
            Self::Container => "Drop components here",
        }
    }

    /// Reference documentation for the template construct this kind maps to.
    #[must_use]
    pub const fn docs_url(self) -> &'static str {
        match self {
            Self::Div => "https://vuejs.org/api/built-in-special-elements.html#template",
            Self::Button => "https://vuejs.org/guide/essentials/event-handling.html",
            Self::Input => "https://vuejs.org/guide/essentials/forms.html",
            Self::Paragraph | Self::Heading | Self::Span => {
                "https://vuejs.org/guide/essentials/template-syntax.html"
            }
            Self::Image => {
                "https://vuejs.org/guide/essentials/template-syntax.html#attribute-bindings"
            }
            Self::List => "https://vuejs.org/guide/essentials/list.html",
            Self::Select => "https://vuejs.org/guide/essentials/forms.html#select",
            Self::Container => "https://vuejs.org/guide/components/slots.html",
        }
    }

    /// Look a kind up by its toolbar name.
    #[must_use]
    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tool_name() == name)
    }
}

/// Canvas offset of a root node, in pixels relative to the canvas origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A placed UI element.
///
/// Parent and child links are stored as ids only; the [`NodeStore`] owns
/// every node and the editor keeps the two directions consistent.
///
/// [`NodeStore`]: crate::NodeStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Node kind; fixed at creation.
    pub kind: NodeKind,
    /// Absolute canvas offset. Only meaningful for root nodes.
    pub position: Position,
    /// Kind-dependent payload: label, placeholder, image URL or option list.
    pub content: String,
    /// Style declarations in insertion order.
    pub styles: StyleMap,
    /// Owning container, if any.
    pub parent: Option<NodeId>,
    /// Child ids in display order.
    pub children: Vec<NodeId>,
}

impl ComponentNode {
    /// Create an unparented node with default content and styles.
    #[must_use]
    pub fn new(id: NodeId, kind: NodeKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            content: kind.default_content().to_string(),
            styles: default_styles(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Whether this node sits at the top level of the forest.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Look up one style value.
    #[must_use]
    pub fn style(&self, key: &str) -> Option<&str> {
        self.styles.get(key).map(String::as_str)
    }
}
