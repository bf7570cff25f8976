//! # Responsive Layout Engine
//!
//! The editor lets authors drop blocks anywhere in a section, sized in
//! percentages. Browsers can't reflow that. This module turns each section
//! into a CSS grid per breakpoint:
//!
//! 1. Desktop: every distinct element edge becomes a grid line, so the
//!    author's free-form design is reproduced exactly, track for track.
//! 2. Tablet: the same partitioning, run on pixel edges scaled to the
//!    tablet width.
//! 3. Mobile: free-form coordinates don't survive 375px, so elements stack
//!    in a single column in reading order.
//!
//! Narrow breakpoints also carry row groups: runs of elements whose tops
//! are close enough that the preview renders them side by side.
//!
//! Everything here is a pure function of (section, breakpoint, config).
//! There are no caches. Calling twice returns equal values.

pub mod geometry;
pub mod grid;
pub mod partition;
pub mod reflow;
pub mod rows;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::config::{Breakpoint, LayoutConfig};
use crate::error::PageGridError;
use crate::model::{Background, Page, Section};
use geometry::{to_pixel_box, PixelBox};
use grid::{build_grid_layout, GridArea, GridLayout};
use reflow::reflow;
use rows::group_by_row;

/// A content problem the engine recovered from.
///
/// Never fatal. Carried on the [`GridLayout`] so tests and dev tools can
/// see it, and logged at `warn` level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LayoutWarning {
    /// Zero, negative or sub-epsilon width or height. The element was given
    /// a one-track span so it still renders somewhere.
    DegenerateGeometry {
        element_id: String,
        width: f64,
        height: f64,
    },
    /// Two elements in one section share an id. The later one owns the
    /// area-map entry.
    DuplicateId { element_id: String },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::DegenerateGeometry {
                element_id,
                width,
                height,
            } => write!(
                f,
                "element '{}' has degenerate size {}x{}; placed in a single track",
                element_id, width, height
            ),
            LayoutWarning::DuplicateId { element_id } => {
                write!(f, "duplicate element id '{}' in section", element_id)
            }
        }
    }
}

/// Collects warnings while a grid is built, logging each one.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    warnings: Vec<LayoutWarning>,
}

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, warning: LayoutWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Flag `rect` if its width or height collapses onto one grid line.
    pub(crate) fn check_geometry(&mut self, element_id: &str, rect: &PixelBox) {
        if rect.is_degenerate() {
            self.record(LayoutWarning::DegenerateGeometry {
                element_id: element_id.to_string(),
                width: rect.width,
                height: rect.height,
            });
        }
    }

    /// Insert an area, flagging ids that were already placed.
    pub(crate) fn insert_area(
        &mut self,
        area_map: &mut BTreeMap<String, GridArea>,
        element_id: &str,
        area: GridArea,
    ) {
        if area_map.insert(element_id.to_string(), area).is_some() {
            self.record(LayoutWarning::DuplicateId {
                element_id: element_id.to_string(),
            });
        }
    }

    pub(crate) fn into_warnings(self) -> Vec<LayoutWarning> {
        self.warnings
    }
}

/// Where the preview should put one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPlacement {
    pub id: String,
    /// CSS `grid-area` value.
    pub grid_area: String,
    /// Element size at the desktop reference container. The grid stretches
    /// the element to its area; these cap it.
    pub max_width_px: f64,
    pub max_height_px: f64,
}

/// A section's layout at one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointLayout {
    pub breakpoint: Breakpoint,
    pub container_width: f64,
    pub grid: GridLayout,
    /// Row groups by element id. Empty on desktop.
    pub groups: Vec<Vec<String>>,
    pub elements: Vec<ElementPlacement>,
}

impl BreakpointLayout {
    pub fn grid_template_columns(&self) -> String {
        self.grid.column_template_css()
    }

    pub fn grid_template_rows(&self) -> String {
        self.grid.row_template_css()
    }
}

/// A section's layouts at every breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLayout {
    pub section_id: String,
    pub background: Background,
    pub desktop: BreakpointLayout,
    pub tablet: BreakpointLayout,
    pub mobile: BreakpointLayout,
}

impl SectionLayout {
    pub fn at(&self, breakpoint: Breakpoint) -> &BreakpointLayout {
        match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }
}

/// All section layouts of a page, in section order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub page_id: String,
    pub slug: String,
    pub sections: Vec<SectionLayout>,
}

/// Lays out sections and pages against a [`LayoutConfig`].
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        LayoutEngine {
            config: LayoutConfig::default(),
        }
    }

    /// Use a custom config. Fails if the config has a non-positive width
    /// or height, or a negative tolerance.
    pub fn with_config(config: LayoutConfig) -> Result<Self, PageGridError> {
        config.validate()?;
        Ok(LayoutEngine { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Grid, groups and element placements for one section at one breakpoint.
    pub fn layout_section(&self, section: &Section, breakpoint: Breakpoint) -> BreakpointLayout {
        let width = self.config.reference_width(breakpoint);
        let height = self.config.reference_height;

        let (grid, groups) = match breakpoint {
            Breakpoint::Desktop => (build_grid_layout(&section.elements), Vec::new()),
            Breakpoint::Tablet | Breakpoint::Mobile => {
                let grid = reflow(&section.elements, width, &self.config);
                let groups: Vec<Vec<String>> =
                    group_by_row(&section.elements, width, height, self.config.row_tolerance)
                        .into_iter()
                        .map(|g| g.into_iter().map(|el| el.id.clone()).collect())
                        .collect();
                (grid, groups)
            }
        };

        let elements = section
            .elements
            .iter()
            .map(|el| {
                let px = to_pixel_box(&el.bounds(), self.config.desktop_width, height);
                ElementPlacement {
                    id: el.id.clone(),
                    grid_area: grid
                        .area(&el.id)
                        .map(|a| a.to_css())
                        .unwrap_or_else(|| "auto".to_string()),
                    max_width_px: px.width.max(0.0),
                    max_height_px: px.height.max(0.0),
                }
            })
            .collect();

        log::debug!(
            "section {} @ {}: {} columns, {} rows, {} warnings",
            section.id,
            breakpoint,
            grid.num_columns(),
            grid.num_rows(),
            grid.warnings.len()
        );

        BreakpointLayout {
            breakpoint,
            container_width: width,
            grid,
            groups,
            elements,
        }
    }

    /// Like [`layout_section`](Self::layout_section), but takes the
    /// breakpoint as a string key. An unknown key is an error.
    pub fn layout_section_for_key(
        &self,
        section: &Section,
        key: &str,
    ) -> Result<BreakpointLayout, PageGridError> {
        let breakpoint: Breakpoint = key.parse()?;
        Ok(self.layout_section(section, breakpoint))
    }

    pub fn layout_section_all(&self, section: &Section) -> SectionLayout {
        SectionLayout {
            section_id: section.id.clone(),
            background: section.background.clone(),
            desktop: self.layout_section(section, Breakpoint::Desktop),
            tablet: self.layout_section(section, Breakpoint::Tablet),
            mobile: self.layout_section(section, Breakpoint::Mobile),
        }
    }

    pub fn layout_page(&self, page: &Page) -> PageLayout {
        PageLayout {
            page_id: page.id.clone(),
            slug: page.slug.clone(),
            sections: page
                .sections
                .iter()
                .map(|s| self.layout_section_all(s))
                .collect(),
        }
    }
}
