//! # Responsive Reflow
//!
//! Re-derives a section's grid for a narrower viewport.
//!
//! - At or below the mobile width, 2-D placement is dropped. Elements stack
//!   in one column, one row each, in reading order (top, then left). No two
//!   elements can overlap horizontally, whatever the desktop design was.
//! - Above it, the desktop algorithm runs again on pixel edges scaled to the
//!   narrower width. Elements that overflow the right edge are still placed;
//!   the renderer scrolls.

use std::collections::BTreeMap;

use super::geometry::to_pixel_box;
use super::grid::{GridArea, GridBuilder, GridLayout};
use super::rows::reading_order;
use super::Diagnostics;
use crate::config::LayoutConfig;
use crate::model::Element;

/// Lay out `elements` for a viewport `breakpoint_width` px wide.
pub fn reflow(elements: &[Element], breakpoint_width: f64, config: &LayoutConfig) -> GridLayout {
    if breakpoint_width <= config.mobile_width {
        stack(elements, breakpoint_width, config.reference_height)
    } else {
        constrained_grid(elements, breakpoint_width, config.reference_height)
    }
}

/// Single column, one row per element, rows weighted by pixel height.
fn stack(elements: &[Element], width: f64, reference_height: f64) -> GridLayout {
    if elements.is_empty() {
        return GridLayout {
            column_template: vec![width],
            row_template: vec![reference_height],
            area_map: BTreeMap::new(),
            warnings: Vec::new(),
        };
    }

    let mut row_template = Vec::with_capacity(elements.len());
    let mut area_map = BTreeMap::new();
    let mut diagnostics = Diagnostics::new();

    for (i, (el, px)) in reading_order(elements, width, reference_height)
        .into_iter()
        .enumerate()
    {
        diagnostics.check_geometry(&el.id, &px);
        row_template.push(px.height.max(0.0));

        let area = GridArea {
            row_start: i + 1,
            col_start: 1,
            row_end: i + 2,
            col_end: 2,
        };
        log::trace!("stacked {} -> {}", el.id, area.to_css());
        diagnostics.insert_area(&mut area_map, &el.id, area);
    }

    log::debug!("stacked {} elements at {}px", elements.len(), width);

    GridLayout {
        column_template: vec![width],
        row_template,
        area_map,
        warnings: diagnostics.into_warnings(),
    }
}

/// The desktop grid, recomputed in pixels against a narrower canvas.
fn constrained_grid(elements: &[Element], width: f64, reference_height: f64) -> GridLayout {
    let mut builder = GridBuilder::new(width, reference_height);
    for el in elements {
        builder.push(&el.id, to_pixel_box(&el.bounds(), width, reference_height));
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;
    use crate::style::{ElementStyle, Percent};

    fn el(id: &str, left: f64, top: f64, width: f64, height: f64) -> Element {
        Element {
            id: id.to_string(),
            kind: ElementKind::Image {
                src: String::new(),
                alt: String::new(),
            },
            style: ElementStyle::new(left, top, width, height),
        }
    }

    #[test]
    fn test_mobile_stacks_in_reading_order() {
        let config = LayoutConfig::default();
        let elements = vec![
            el("bottom", 0.0, 60.0, 100.0, 10.0),
            el("top-right", 50.0, 0.0, 50.0, 10.0),
            el("top-left", 0.0, 0.0, 50.0, 20.0),
        ];
        let layout = reflow(&elements, 375.0, &config);

        assert_eq!(layout.column_template, vec![375.0]);
        assert_eq!(layout.num_rows(), 3);
        assert_eq!(
            layout.area("top-left").map(GridArea::as_tuple),
            Some((1, 1, 2, 2))
        );
        assert_eq!(
            layout.area("top-right").map(GridArea::as_tuple),
            Some((2, 1, 3, 2))
        );
        assert_eq!(
            layout.area("bottom").map(GridArea::as_tuple),
            Some((3, 1, 4, 2))
        );
        // Heights resolved against the 768px reference height.
        assert!((layout.row_template[0] - 153.6).abs() < 1e-9);
        assert!((layout.row_template[1] - 76.8).abs() < 1e-9);
    }

    #[test]
    fn test_mobile_negative_zero_top_breaks_tie_by_left() {
        let mut right = el("right", 50.0, 0.0, 50.0, 10.0);
        right.style.top = Percent(-0.0);
        let elements = vec![right, el("left", 0.0, 0.0, 50.0, 10.0)];
        let layout = reflow(&elements, 375.0, &LayoutConfig::default());
        assert_eq!(layout.area("left").map(|a| a.row_start), Some(1));
        assert_eq!(layout.area("right").map(|a| a.row_start), Some(2));
    }

    #[test]
    fn test_mobile_empty_section() {
        let layout = reflow(&[], 375.0, &LayoutConfig::default());
        assert_eq!(layout.column_template, vec![375.0]);
        assert_eq!(layout.row_template, vec![768.0]);
        assert!(layout.area_map.is_empty());
    }

    #[test]
    fn test_tablet_scales_columns_to_width() {
        let config = LayoutConfig::default();
        let elements = vec![
            el("a", 0.0, 0.0, 25.0, 10.0),
            el("b", 25.0, 0.0, 75.0, 10.0),
        ];
        let layout = reflow(&elements, 768.0, &config);

        assert_eq!(layout.column_template, vec![192.0, 576.0]);
        assert_eq!(layout.area("a").map(GridArea::as_tuple), Some((1, 1, 2, 2)));
        assert_eq!(layout.area("b").map(GridArea::as_tuple), Some((1, 2, 2, 3)));
    }

    #[test]
    fn test_tablet_overflow_is_still_placed() {
        let config = LayoutConfig::default();
        let elements = vec![el("wide", 50.0, 0.0, 80.0, 10.0)];
        let layout = reflow(&elements, 768.0, &config);
        let area = layout.area("wide").unwrap();
        assert_eq!(area.row_start, 1);
        assert_eq!(area.col_end, layout.num_columns() + 1);
        let total: f64 = layout.column_template.iter().sum();
        assert!((total - 998.4).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let config = LayoutConfig {
            mobile_width: 480.0,
            ..LayoutConfig::default()
        };
        let elements = vec![
            el("a", 0.0, 0.0, 50.0, 10.0),
            el("b", 50.0, 0.0, 50.0, 10.0),
        ];
        assert_eq!(reflow(&elements, 480.0, &config).num_columns(), 1);
        assert_eq!(reflow(&elements, 481.0, &config).num_columns(), 2);
    }

    #[test]
    fn test_stacking_flags_sub_epsilon_width() {
        let elements = vec![el("sliver", 10.0, 0.0, 1e-12, 10.0)];
        let layout = reflow(&elements, 375.0, &LayoutConfig::default());
        assert_eq!(layout.area("sliver").map(GridArea::as_tuple), Some((1, 1, 2, 2)));
        assert_eq!(layout.warnings.len(), 1);
    }

    #[test]
    fn test_stacking_flags_zero_height() {
        let elements = vec![el("flat", 0.0, 0.0, 50.0, 0.0)];
        let layout = reflow(&elements, 375.0, &LayoutConfig::default());
        assert_eq!(layout.row_template, vec![0.0]);
        assert_eq!(layout.warnings.len(), 1);
    }
}
