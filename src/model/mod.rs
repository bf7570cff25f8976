//! # Document Model
//!
//! The input representation for the layout engine: a snapshot of the page
//! builder's editor state. A document holds pages, pages hold sections, and
//! sections hold free-form positioned elements.
//!
//! The editor owns this tree. The engine only ever borrows it, so the same
//! snapshot can be laid out for every breakpoint without copying.

use serde::{Deserialize, Serialize};

use crate::layout::geometry::PercentBox;
use crate::style::ElementStyle;

/// The full editor state handed to the engine at call time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Find the page served at `/preview/<slug>`.
    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// An independent layout unit. Element boxes are percentages of this
/// section's rendered box, never of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub background: Background,
}

/// Section background, passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Background {
    Color(String),
    Image(String),
}

impl Default for Background {
    fn default() -> Self {
        Background::Color("#ffffff".to_string())
    }
}

/// A content block placed in a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(default)]
    pub style: ElementStyle,
}

impl Element {
    /// The element's box. This is all the layout engine looks at.
    pub fn bounds(&self) -> PercentBox {
        self.style.bounds()
    }
}

/// Kind-specific payload. Layout never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text {
        #[serde(default)]
        content: String,
    },
    Image {
        #[serde(default)]
        src: String,
        #[serde(default)]
        alt: String,
    },
    Video {
        #[serde(default)]
        src: String,
    },
    Button {
        #[serde(default)]
        content: String,
    },
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text { .. } => "text",
            ElementKind::Image { .. } => "image",
            ElementKind::Video { .. } => "video",
            ElementKind::Button { .. } => "button",
        }
    }
}
