//! # pagegrid
//!
//! The layout engine behind a visual page builder.
//!
//! Authors place text, image, video and button blocks anywhere inside a
//! section, sized as percentages of that section. That free-form design is
//! faithful on the screen it was made on and useless everywhere else. pagegrid
//! turns it into CSS grids: an exact reproduction for desktop, a scaled one
//! for tablet, and a single stacked column for mobile.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON editor state)
//!       ↓
//!   [model]     — Document → Page → Section → Element
//!       ↓
//!   [style]     — "42.5%" strings parsed once into typed percentages
//!       ↓
//!   [layout]    — geometry → axis partition → grid builder / reflow
//!       ↓
//! GridLayout per (section, breakpoint) → renderer
//! ```
//!
//! The engine is pure and synchronous. It reads the editor's tree and never
//! mutates it, holds no caches, and does no I/O.

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod style;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Breakpoint, LayoutConfig};
pub use error::PageGridError;
pub use layout::grid::{build_grid_layout, GridArea, GridLayout};
pub use layout::reflow::reflow;
pub use layout::rows::group_by_row;
pub use layout::{LayoutEngine, LayoutWarning, PageLayout};

use model::{Document, Page};

/// Lay out every section of a page at every breakpoint.
pub fn layout_page(page: &Page, config: &LayoutConfig) -> Result<PageLayout, PageGridError> {
    let engine = LayoutEngine::with_config(config.clone())?;
    Ok(engine.layout_page(page))
}

/// Lay out every page of a document.
pub fn layout_document(
    document: &Document,
    config: &LayoutConfig,
) -> Result<Vec<PageLayout>, PageGridError> {
    let engine = LayoutEngine::with_config(config.clone())?;
    Ok(document.pages.iter().map(|p| engine.layout_page(p)).collect())
}

/// Lay out a document described as JSON.
pub fn layout_json(json: &str, config: &LayoutConfig) -> Result<Vec<PageLayout>, PageGridError> {
    let document: Document = serde_json::from_str(json)?;
    layout_document(&document, config)
}
