//! # Axis Partitioning
//!
//! Turns the edges of a set of boxes along one axis into grid lines and the
//! track weights between them. Running this once per axis is all it takes to
//! turn free-form placement into a grid: every distinct edge becomes a line,
//! so every element starts and ends exactly on one.
//!
//! Weights are the raw gaps between lines. They are used directly as `fr`
//! units, so the relative spacing of elements on an axis survives exactly.

/// Edges closer than this are the same line.
pub const LINE_EPSILON: f64 = 1e-9;

/// Collect the sorted, deduplicated grid lines for one axis.
///
/// `0` and `axis_extent` are always present, whether or not an element
/// touches them. Non-finite edges are dropped.
pub fn partition<I>(edges: I, axis_extent: f64) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut lines: Vec<f64> = edges.into_iter().filter(|e| e.is_finite()).collect();
    lines.push(0.0);
    lines.push(axis_extent);
    lines.sort_by(f64::total_cmp);
    lines.dedup_by(|next, kept| (*next - *kept).abs() <= LINE_EPSILON);
    lines
}

/// Gaps between consecutive lines.
pub fn track_weights(lines: &[f64]) -> Vec<f64> {
    lines.windows(2).map(|w| w[1] - w[0]).collect()
}

/// The lines and track weights of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPartition {
    pub lines: Vec<f64>,
    pub weights: Vec<f64>,
}

impl AxisPartition {
    pub fn new<I>(edges: I, axis_extent: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let lines = partition(edges, axis_extent);
        let weights = track_weights(&lines);
        AxisPartition { lines, weights }
    }

    pub fn num_tracks(&self) -> usize {
        self.weights.len()
    }

    /// 1-indexed number of the first line at or after `edge`.
    ///
    /// A lower bound, never the nearest line: an edge that drifted a hair
    /// past a line lands on the next one, so the element's track always
    /// contains it. Edges beyond the last line clamp to it.
    pub fn line_number(&self, edge: f64) -> usize {
        let idx = self.lines.partition_point(|&line| line < edge - LINE_EPSILON);
        idx.min(self.lines.len().saturating_sub(1)) + 1
    }

    /// Weights rescaled to sum to 100, the form percentage-based call
    /// sites want. An axis whose weights sum to zero is returned as is.
    pub fn normalized_weights(&self) -> Vec<f64> {
        let sum: f64 = self.weights.iter().sum();
        if sum <= 0.0 {
            return self.weights.clone();
        }
        self.weights.iter().map(|w| w / sum * 100.0).collect()
    }
}
