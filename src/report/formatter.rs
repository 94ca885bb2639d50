use crate::layout::{LayoutInfo, LayoutPlan, NodeRole};
use itertools::Itertools;
use std::fmt::Write;

/// Formats layout results into human-readable text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// One line per layer, listing its nodes top to bottom, followed by the pure nodes.
    pub fn format_plan(plan: &LayoutPlan) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Arranged {} nodes in {} layers",
            plan.arranged_count, plan.layer_count
        );
        if plan.synthetic_roots {
            let _ = writeln!(out, "No entry points found; leftmost nodes used as roots");
        }

        let layers = plan
            .nodes
            .iter()
            .filter_map(|n| n.layer.map(|l| (l, n)))
            .into_group_map();
        for (layer, nodes) in layers.into_iter().sorted_by_key(|(l, _)| *l) {
            let names = nodes
                .iter()
                .sorted_by_key(|n| n.position.y)
                .map(|n| match n.role {
                    NodeRole::Root => format!("{}*", n.id),
                    _ => n.id.clone(),
                })
                .join(", ");
            let _ = writeln!(out, "  layer {}: {}", layer, names);
        }

        let pure = plan
            .nodes
            .iter()
            .filter(|n| n.role == NodeRole::Pure)
            .map(|n| format!("{} @ ({}, {})", n.id, n.position.x, n.position.y))
            .join(", ");
        if !pure.is_empty() {
            let _ = writeln!(out, "  pure: {}", pure);
        }
        out
    }

    pub fn format_info(info: &LayoutInfo) -> String {
        let mut out = String::new();
        for (id, pos) in &info.node_positions {
            let _ = writeln!(out, "{:>24}  ({}, {})", id, pos.x, pos.y);
        }
        if info.overlapping_pairs.is_empty() {
            let _ = writeln!(out, "No overlapping nodes");
        } else {
            let _ = writeln!(out, "{} overlapping pair(s):", info.overlapping_pairs.len());
            for (a, b) in &info.overlapping_pairs {
                let _ = writeln!(out, "  {} <-> {}", a, b);
            }
        }
        out
    }
}
