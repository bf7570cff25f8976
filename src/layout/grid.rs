//! # Grid Layout Builder
//!
//! Converts a section of free-form boxes into a CSS grid description:
//! - one column line per distinct horizontal edge, one row line per
//!   distinct vertical edge (see [`partition`](super::partition))
//! - track weights equal to the gaps between lines, rendered as `fr`
//! - one grid area per element, found by lower-bound search of its edges
//!
//! The builder itself is unit-agnostic. Desktop layout feeds it
//! percentages against a 100×100 extent; tablet layout feeds it pixels
//! against the tablet reference size.

use std::collections::BTreeMap;

use serde::Serialize;

use super::geometry::{to_pixel_box, PixelBox};
use super::partition::AxisPartition;
use super::{Diagnostics, LayoutWarning};
use crate::model::Element;

/// Axis extent in percentage mode.
pub const PERCENT_EXTENT: f64 = 100.0;

/// An element's span in the grid, as 1-indexed line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridArea {
    pub row_start: usize,
    pub col_start: usize,
    pub row_end: usize,
    pub col_end: usize,
}

impl GridArea {
    /// The CSS `grid-area` shorthand: `row-start / col-start / row-end / col-end`.
    pub fn to_css(&self) -> String {
        format!(
            "{} / {} / {} / {}",
            self.row_start, self.col_start, self.row_end, self.col_end
        )
    }

    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.row_start, self.col_start, self.row_end, self.col_end)
    }
}

/// The grid for one section at one breakpoint.
///
/// Derived data. Recompute it whenever the section or breakpoint changes;
/// nothing here is meant to be stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// Column track weights, left to right.
    pub column_template: Vec<f64>,
    /// Row track weights, top to bottom.
    pub row_template: Vec<f64>,
    /// Grid area per element id.
    pub area_map: BTreeMap<String, GridArea>,
    /// Content problems that were recovered from while building.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LayoutWarning>,
}

impl GridLayout {
    pub fn num_columns(&self) -> usize {
        self.column_template.len()
    }

    pub fn num_rows(&self) -> usize {
        self.row_template.len()
    }

    pub fn area(&self, id: &str) -> Option<&GridArea> {
        self.area_map.get(id)
    }

    /// `grid-template-columns` value, e.g. `"50fr 50fr"`.
    pub fn column_template_css(&self) -> String {
        template_css(&self.column_template)
    }

    /// `grid-template-rows` value.
    pub fn row_template_css(&self) -> String {
        template_css(&self.row_template)
    }
}

fn template_css(weights: &[f64]) -> String {
    weights
        .iter()
        .map(|w| format!("{}fr", w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accumulates boxes in a common unit and partitions them into a grid.
pub struct GridBuilder<'a> {
    extent_x: f64,
    extent_y: f64,
    items: Vec<(&'a str, PixelBox)>,
}

impl<'a> GridBuilder<'a> {
    /// `extent_x` and `extent_y` are the container size in the same unit
    /// as the boxes pushed later. Both become boundary lines.
    pub fn new(extent_x: f64, extent_y: f64) -> Self {
        GridBuilder {
            extent_x,
            extent_y,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, id: &'a str, rect: PixelBox) -> &mut Self {
        self.items.push((id, rect));
        self
    }

    pub fn build(&self) -> GridLayout {
        let mut diagnostics = Diagnostics::new();

        // Negative sizes would put the end edge before the start.
        let rects: Vec<(&str, PixelBox)> = self
            .items
            .iter()
            .map(|&(id, r)| {
                diagnostics.check_geometry(id, &r);
                let clamped = PixelBox {
                    width: r.width.max(0.0),
                    height: r.height.max(0.0),
                    ..r
                };
                (id, clamped)
            })
            .collect();

        let columns = AxisPartition::new(
            rects.iter().flat_map(|(_, r)| [r.left, r.right()]),
            self.extent_x,
        );
        let rows = AxisPartition::new(
            rects.iter().flat_map(|(_, r)| [r.top, r.bottom()]),
            self.extent_y,
        );

        let mut area_map = BTreeMap::new();
        for (id, r) in &rects {
            let (col_start, col_end) = span(
                columns.line_number(r.left),
                columns.line_number(r.right()),
                columns.lines.len(),
            );
            let (row_start, row_end) = span(
                rows.line_number(r.top),
                rows.line_number(r.bottom()),
                rows.lines.len(),
            );
            let area = GridArea {
                row_start,
                col_start,
                row_end,
                col_end,
            };
            log::trace!("element {} -> {}", id, area.to_css());
            diagnostics.insert_area(&mut area_map, id, area);
        }

        log::debug!(
            "grid: {} elements, {} columns, {} rows",
            rects.len(),
            columns.num_tracks(),
            rows.num_tracks()
        );

        GridLayout {
            column_template: columns.weights,
            row_template: rows.weights,
            area_map,
            warnings: diagnostics.into_warnings(),
        }
    }
}

/// Widen an empty span to one track, keeping it inside the grid.
fn span(start: usize, end: usize, num_lines: usize) -> (usize, usize) {
    let last = num_lines.max(2);
    let mut start = start.min(last);
    let mut end = end.min(last);
    if end <= start {
        end = start + 1;
    }
    if end > last {
        end = last;
        start = last - 1;
    }
    (start, end)
}

/// Build the desktop grid for a section, in percentage units.
pub fn build_grid_layout(elements: &[Element]) -> GridLayout {
    let mut builder = GridBuilder::new(PERCENT_EXTENT, PERCENT_EXTENT);
    for el in elements {
        // A 100×100 container makes percentages their own unit.
        builder.push(
            &el.id,
            to_pixel_box(&el.bounds(), PERCENT_EXTENT, PERCENT_EXTENT),
        );
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;
    use crate::style::ElementStyle;

    fn el(id: &str, left: f64, top: f64, width: f64, height: f64) -> Element {
        Element {
            id: id.to_string(),
            kind: ElementKind::Text {
                content: String::new(),
            },
            style: ElementStyle::new(left, top, width, height),
        }
    }

    #[test]
    fn test_empty_section_is_single_track() {
        let layout = build_grid_layout(&[]);
        assert_eq!(layout.column_template, vec![100.0]);
        assert_eq!(layout.row_template, vec![100.0]);
        assert!(layout.area_map.is_empty());
        assert!(layout.warnings.is_empty());
    }

    #[test]
    fn test_side_by_side() {
        let layout = build_grid_layout(&[
            el("a", 0.0, 0.0, 50.0, 20.0),
            el("b", 50.0, 0.0, 50.0, 20.0),
        ]);
        assert_eq!(layout.column_template, vec![50.0, 50.0]);
        assert_eq!(layout.row_template, vec![20.0, 80.0]);
        assert_eq!(layout.area("a").map(GridArea::as_tuple), Some((1, 1, 2, 2)));
        assert_eq!(layout.area("b").map(GridArea::as_tuple), Some((1, 2, 2, 3)));
    }

    #[test]
    fn test_overlapping_elements_share_lines() {
        let layout = build_grid_layout(&[
            el("a", 10.0, 10.0, 40.0, 40.0),
            el("b", 10.0, 10.0, 40.0, 40.0),
        ]);
        assert_eq!(layout.area("a"), layout.area("b"));
        assert_eq!(layout.num_columns(), 3);
    }

    #[test]
    fn test_zero_width_element_still_gets_a_track() {
        let layout = build_grid_layout(&[el("z", 30.0, 10.0, 0.0, 20.0)]);
        let area = layout.area("z").unwrap();
        assert!(area.col_start < area.col_end);
        assert!(area.col_end <= layout.num_columns() + 1);
        assert!(matches!(
            layout.warnings.as_slice(),
            [LayoutWarning::DegenerateGeometry { element_id, .. }] if element_id == "z"
        ));
    }

    #[test]
    fn test_sub_epsilon_width_is_flagged() {
        let layout = build_grid_layout(&[el("sliver", 10.0, 0.0, 1e-12, 20.0)]);
        // Both edges collapse onto the line at 10.
        assert_eq!(layout.column_template, vec![10.0, 90.0]);
        assert_eq!(layout.area("sliver").map(GridArea::as_tuple), Some((1, 2, 2, 3)));
        assert!(matches!(
            layout.warnings.as_slice(),
            [LayoutWarning::DegenerateGeometry { element_id, .. }] if element_id == "sliver"
        ));
    }

    #[test]
    fn test_degenerate_at_far_edge_stays_in_grid() {
        let layout = build_grid_layout(&[el("z", 100.0, 100.0, -5.0, 0.0)]);
        let area = layout.area("z").unwrap();
        assert_eq!(area.col_end, layout.num_columns() + 1);
        assert_eq!(area.col_start, layout.num_columns());
        assert_eq!(area.row_end, layout.num_rows() + 1);
    }

    #[test]
    fn test_duplicate_ids_warn() {
        let layout = build_grid_layout(&[
            el("a", 0.0, 0.0, 10.0, 10.0),
            el("a", 50.0, 50.0, 10.0, 10.0),
        ]);
        assert_eq!(layout.area_map.len(), 1);
        assert!(layout
            .warnings
            .iter()
            .any(|w| matches!(w, LayoutWarning::DuplicateId { .. })));
    }

    #[test]
    fn test_css_output() {
        let layout = build_grid_layout(&[
            el("a", 0.0, 0.0, 50.0, 20.0),
            el("b", 50.0, 0.0, 50.0, 20.0),
        ]);
        assert_eq!(layout.column_template_css(), "50fr 50fr");
        assert_eq!(layout.row_template_css(), "20fr 80fr");
        assert_eq!(layout.area("b").unwrap().to_css(), "1 / 2 / 2 / 3");
    }

    #[test]
    fn test_overflowing_element_extends_grid() {
        let layout = build_grid_layout(&[el("wide", 60.0, 0.0, 60.0, 10.0)]);
        assert_eq!(layout.column_template, vec![60.0, 40.0, 20.0]);
        assert_eq!(
            layout.area("wide").map(|a| (a.col_start, a.col_end)),
            Some((2, 4))
        );
    }
}
