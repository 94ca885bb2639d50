use crate::config::LayoutConfig;
use crate::graph::{GraphModel, NodeDefinition, NodeIdx};
use itertools::Itertools;
use serde::Serialize;

/// Axis-aligned box covering `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Bounds of a node at its current position, falling back to the configured
/// size estimates when the node has no intrinsic size. Edges clamp at `i32::MAX`.
pub fn node_bounds(node: &NodeDefinition, config: &LayoutConfig) -> Bounds {
    let width = if node.width > 0 {
        node.width
    } else {
        config.node_width_estimate
    };
    let height = if node.height > 0 {
        node.height
    } else {
        config.node_height_estimate
    };
    Bounds {
        left: node.x,
        top: node.y,
        right: node.x.saturating_add(width),
        bottom: node.y.saturating_add(height),
    }
}

/// Every unordered pair of nodes whose bounds intersect, as `(i, j)` with `i < j`.
pub(super) fn find_overlaps(model: &GraphModel<'_>, config: &LayoutConfig) -> Vec<(NodeIdx, NodeIdx)> {
    let bounds: Vec<Bounds> = model
        .nodes()
        .map(|(_, node)| node_bounds(node, config))
        .collect();

    (0..bounds.len())
        .tuple_combinations()
        .filter(|&(i, j)| bounds[i].intersects(&bounds[j]))
        .collect()
}
