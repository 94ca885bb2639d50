use crate::graph::{GraphModel, NodeIdx};
use ahash::AHashSet;
use serde::Serialize;

/// How a node takes part in a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeRole {
    /// Starts a BFS: an entry kind, or an execution node nothing flows into.
    Root,
    /// Takes part in control flow but is reached from some root.
    Execution,
    /// Has no execution pins; positioned next to whatever reads its output.
    Pure,
}

/// Node kinds that always start control flow, whatever their pins look like.
pub const DEFAULT_ENTRY_KINDS: [&str; 3] = ["event", "functionEntry", "customEvent"];

/// Lookup table of node kinds treated as execution entry points.
#[derive(Debug, Clone)]
pub struct EntryKindRegistry {
    kinds: AHashSet<String>,
}

impl Default for EntryKindRegistry {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_ENTRY_KINDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl EntryKindRegistry {
    pub fn insert(&mut self, kind: &str) {
        self.kinds.insert(kind.to_string());
    }

    /// Registers `host_kind` as an entry kind if `entry_kind` already is one.
    pub fn alias(&mut self, host_kind: &str, entry_kind: &str) -> bool {
        if self.kinds.contains(entry_kind) {
            self.kinds.insert(host_kind.to_string());
            true
        } else {
            false
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }
}

/// Result of the classification pass, indexed like the graph's nodes.
#[derive(Debug, Clone)]
pub struct Classification {
    pub roles: Vec<NodeRole>,
    /// BFS start nodes, in graph order.
    pub roots: Vec<NodeIdx>,
    /// Pure nodes, in graph order.
    pub pure: Vec<NodeIdx>,
    /// True when no entry point existed and the leftmost execution nodes stand in.
    pub synthetic_roots: bool,
}

pub(super) fn classify(model: &GraphModel<'_>, entry_kinds: &EntryKindRegistry) -> Classification {
    let mut roles = vec![NodeRole::Execution; model.len()];
    let mut roots = Vec::new();
    let mut pure = Vec::new();

    for (idx, node) in model.nodes() {
        if !model.has_exec_pins(idx) {
            roles[idx] = NodeRole::Pure;
            pure.push(idx);
        } else if entry_kinds.contains(&node.kind) || !model.has_incoming_exec(idx) {
            roles[idx] = NodeRole::Root;
            roots.push(idx);
        }
    }

    let synthetic_roots = roots.is_empty() && pure.len() < model.len();
    if synthetic_roots {
        let min_x = model
            .nodes()
            .filter(|(idx, _)| roles[*idx] != NodeRole::Pure)
            .map(|(_, node)| node.x)
            .min();
        if let Some(min_x) = min_x {
            for (idx, node) in model.nodes() {
                if roles[idx] != NodeRole::Pure && node.x == min_x {
                    roles[idx] = NodeRole::Root;
                    roots.push(idx);
                }
            }
        }
        tracing::debug!(
            "No entry points found, using {} leftmost node(s) at x={:?} as roots",
            roots.len(),
            min_x
        );
    }

    Classification {
        roles,
        roots,
        pure,
        synthetic_roots,
    }
}
