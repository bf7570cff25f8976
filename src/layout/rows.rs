//! # Row Grouping
//!
//! Clusters elements whose tops sit close together so narrow layouts can
//! render them side by side without running the full grid.

use super::geometry::{to_pixel_box, PixelBox};
use crate::model::Element;

/// Default clustering band in px.
pub const DEFAULT_ROW_TOLERANCE: f64 = 50.0;

/// Elements with their pixel boxes, in reading order: top ascending, then
/// left ascending. The sort is stable, so exact ties keep document order.
pub fn reading_order(
    elements: &[Element],
    container_width: f64,
    container_height: f64,
) -> Vec<(&Element, PixelBox)> {
    let mut placed: Vec<(&Element, PixelBox)> = elements
        .iter()
        .map(|el| (el, to_pixel_box(&el.bounds(), container_width, container_height)))
        .collect();
    placed.sort_by(|(_, a), (_, b)| {
        a.top.total_cmp(&b.top).then(a.left.total_cmp(&b.left))
    });
    placed
}

/// Group elements into visual rows.
///
/// Walks elements in reading order and starts a new group whenever an
/// element's top is more than `tolerance` px from the previous element's
/// top. The comparison is always against the previous element, so a slow
/// staircase of tops can chain into one group.
pub fn group_by_row<'a>(
    elements: &'a [Element],
    container_width: f64,
    container_height: f64,
    tolerance: f64,
) -> Vec<Vec<&'a Element>> {
    let mut groups: Vec<Vec<&Element>> = Vec::new();
    let mut last_top: Option<f64> = None;

    for (el, px) in reading_order(elements, container_width, container_height) {
        match (groups.last_mut(), last_top) {
            (Some(group), Some(prev)) if (px.top - prev).abs() <= tolerance => group.push(el),
            _ => groups.push(vec![el]),
        }
        last_top = Some(px.top);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;
    use crate::style::{ElementStyle, Percent};

    fn el(id: &str, left: f64, top: f64) -> Element {
        Element {
            id: id.to_string(),
            kind: ElementKind::Button {
                content: String::new(),
            },
            style: ElementStyle::new(left, top, 10.0, 5.0),
        }
    }

    fn ids(groups: &[Vec<&Element>]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| g.iter().map(|e| e.id.clone()).collect())
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(group_by_row(&[], 375.0, 768.0, 50.0).is_empty());
    }

    #[test]
    fn test_close_tops_share_a_row() {
        // 768px reference height: 1% = 7.68px
        let elements = vec![el("b", 50.0, 2.0), el("a", 0.0, 0.0), el("c", 0.0, 30.0)];
        let groups = group_by_row(&elements, 375.0, 768.0, DEFAULT_ROW_TOLERANCE);
        assert_eq!(ids(&groups), vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_ties_break_by_left() {
        let elements = vec![el("right", 60.0, 10.0), el("left", 5.0, 10.0)];
        let groups = group_by_row(&elements, 375.0, 768.0, DEFAULT_ROW_TOLERANCE);
        assert_eq!(ids(&groups), vec![vec!["left", "right"]]);
    }

    #[test]
    fn test_negative_zero_top_ties_with_zero() {
        let mut right = el("right", 50.0, 0.0);
        right.style.top = Percent(-0.0);
        let elements = vec![right, el("left", 0.0, 0.0)];
        let groups = group_by_row(&elements, 375.0, 768.0, DEFAULT_ROW_TOLERANCE);
        assert_eq!(ids(&groups), vec![vec!["left", "right"]]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 50px exactly apart stays together; just over splits.
        let elements = vec![el("a", 0.0, 0.0), el("b", 0.0, 50.0)];
        let groups = group_by_row(&elements, 100.0, 100.0, 50.0);
        assert_eq!(groups.len(), 1);
        let elements = vec![el("a", 0.0, 0.0), el("b", 0.0, 50.5)];
        let groups = group_by_row(&elements, 100.0, 100.0, 50.0);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_staircase_chains() {
        let elements = vec![el("a", 0.0, 0.0), el("b", 0.0, 40.0), el("c", 0.0, 80.0)];
        let groups = group_by_row(&elements, 100.0, 100.0, 50.0);
        assert_eq!(ids(&groups), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_reading_order() {
        let elements = vec![el("c", 0.0, 60.0), el("b", 40.0, 0.0), el("a", 10.0, 0.0)];
        let order: Vec<&str> = reading_order(&elements, 1440.0, 768.0)
            .into_iter()
            .map(|(e, _)| e.id.as_str())
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
