use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::graph::{GraphDefinition, GraphModel};
use serde::Serialize;
use std::collections::BTreeMap;

pub mod classify;
mod layering;
pub mod overlap;
mod placement;

pub use classify::{Classification, DEFAULT_ENTRY_KINDS, EntryKindRegistry, NodeRole};
pub use overlap::{Bounds, node_bounds};
pub use placement::Position;

use classify::classify;
use layering::assign_layers;
use placement::Placement;

/// Where one node ends up after a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedNode {
    pub id: String,
    pub role: NodeRole,
    /// BFS layer. `None` for pure nodes.
    pub layer: Option<u32>,
    pub position: Position,
}

/// The outcome of a layout pass, in graph order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub nodes: Vec<PlannedNode>,
    pub arranged_count: usize,
    pub layer_count: usize,
    pub orphan_count: usize,
    pub synthetic_roots: bool,
}

impl LayoutPlan {
    pub fn get(&self, id: &str) -> Option<&PlannedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.get(id).map(|n| n.position)
    }

    pub fn layer_of(&self, id: &str) -> Option<u32> {
        self.get(id).and_then(|n| n.layer)
    }

    /// Writes every planned position back into `graph`. Nodes the plan does not
    /// know are left alone.
    pub fn apply(&self, graph: &mut GraphDefinition) {
        for planned in &self.nodes {
            if let Some(node) = graph.node_mut(&planned.id) {
                node.x = planned.position.x;
                node.y = planned.position.y;
            }
        }
    }
}

/// Positions and overlapping pairs of a graph as it currently stands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutInfo {
    pub node_positions: BTreeMap<String, Position>,
    pub overlapping_pairs: Vec<(String, String)>,
}

/// Connection-aware horizontal flow layout for execution graphs.
///
/// Execution nodes are laid out in columns by their BFS distance from the graph's
/// entry points; pure nodes are tucked next to the node that reads their output.
///
/// # Example
///
/// ```rust,no_run
/// use seiri::prelude::*;
///
/// # fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let mut graph: GraphDefinition = serde_json::from_str(&std::fs::read_to_string("graph.json")?)?;
/// let engine = LayoutEngine::builder()
///     .with_kind_alias("K2Node_Event", "event")
///     .build();
///
/// let plan = engine.arrange(&mut graph)?;
/// println!("Arranged {} nodes in {} layers", plan.arranged_count, plan.layer_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    entry_kinds: EntryKindRegistry,
}

pub struct LayoutEngineBuilder {
    config: LayoutConfig,
    entry_kinds: EntryKindRegistry,
}

impl LayoutEngineBuilder {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
            entry_kinds: EntryKindRegistry::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Treats nodes of `kind` as entry points regardless of their links.
    pub fn with_entry_kind(mut self, kind: &str) -> Self {
        self.entry_kinds.insert(kind);
        self
    }

    /// Maps a host node kind onto an already registered entry kind.
    pub fn with_kind_alias(mut self, host_kind: &str, entry_kind: &str) -> Self {
        if !self.entry_kinds.alias(host_kind, entry_kind) {
            tracing::warn!(
                "Ignoring alias '{}' -> '{}': '{}' is not a registered entry kind",
                host_kind,
                entry_kind,
                entry_kind
            );
        }
        self
    }

    pub fn build(self) -> LayoutEngine {
        LayoutEngine {
            config: self.config,
            entry_kinds: self.entry_kinds,
        }
    }
}

impl Default for LayoutEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn builder() -> LayoutEngineBuilder {
        LayoutEngineBuilder::new()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes layers and positions without touching the graph.
    pub fn plan(&self, graph: &GraphDefinition) -> Result<LayoutPlan, LayoutError> {
        self.config.validate()?;
        let model = GraphModel::new(graph)?;

        if model.is_empty() {
            tracing::debug!("Graph '{}' has no nodes", graph.name);
            return Ok(LayoutPlan {
                nodes: Vec::new(),
                arranged_count: 0,
                layer_count: 0,
                orphan_count: 0,
                synthetic_roots: false,
            });
        }

        let classification = classify(&model, &self.entry_kinds);
        let layers = assign_layers(&model, &classification);

        let mut placement = Placement::new(&model, &self.config);
        let layer_count = placement.place_execution_nodes(&layers);
        let orphan_count = placement.place_pure_nodes(&classification.pure);

        let nodes = model
            .nodes()
            .map(|(idx, node)| PlannedNode {
                id: node.id.clone(),
                role: classification.roles[idx],
                layer: layers[idx],
                position: placement.positions[idx],
            })
            .collect();

        Ok(LayoutPlan {
            nodes,
            arranged_count: placement.arranged,
            layer_count,
            orphan_count,
            synthetic_roots: classification.synthetic_roots,
        })
    }

    /// Plans a layout and writes the new positions into `graph`.
    /// Nothing is written if the graph or config is rejected.
    pub fn arrange(&self, graph: &mut GraphDefinition) -> Result<LayoutPlan, LayoutError> {
        let plan = self.plan(graph)?;
        plan.apply(graph);
        tracing::info!(
            "Arranged {} nodes in {} layers in graph '{}'",
            plan.arranged_count,
            plan.layer_count,
            graph.name
        );
        Ok(plan)
    }

    /// Reports current positions and every pair of overlapping nodes.
    pub fn layout_info(&self, graph: &GraphDefinition) -> Result<LayoutInfo, LayoutError> {
        self.config.validate()?;
        let model = GraphModel::new(graph)?;

        let node_positions = model
            .nodes()
            .map(|(_, node)| (node.id.clone(), Position::new(node.x, node.y)))
            .collect();
        let overlapping_pairs = overlap::find_overlaps(&model, &self.config)
            .into_iter()
            .map(|(i, j)| (model.node(i).id.clone(), model.node(j).id.clone()))
            .collect();

        Ok(LayoutInfo {
            node_positions,
            overlapping_pairs,
        })
    }
}
