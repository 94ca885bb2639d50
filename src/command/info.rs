use super::{Command, GraphTarget};
use crate::error::CommandError;
use crate::graph::GraphStore;
use crate::layout::LayoutEngine;
use serde_json::{Map, Value, json};

/// `get_graph_layout_info`: reports node positions and overlapping node pairs.
pub struct GetGraphLayoutInfoCommand {
    engine: LayoutEngine,
}

impl GetGraphLayoutInfoCommand {
    pub const NAME: &'static str = "get_graph_layout_info";

    pub fn new(engine: LayoutEngine) -> Self {
        Self { engine }
    }
}

impl Command for GetGraphLayoutInfoCommand {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self, store: &mut GraphStore, params: &Value) -> Result<Value, CommandError> {
        let target = GraphTarget::from_params(params)?;
        let graph = target.resolve(store)?;
        let info = self.engine.layout_info(graph)?;

        let positions: Map<String, Value> = info
            .node_positions
            .iter()
            .map(|(id, pos)| (id.clone(), json!({ "x": pos.x, "y": pos.y })))
            .collect();
        let pairs: Vec<Value> = info
            .overlapping_pairs
            .iter()
            .map(|(a, b)| json!([a, b]))
            .collect();

        Ok(json!({
            "blueprint_name": target.blueprint_name,
            "graph_name": target.graph_name,
            "node_count": positions.len(),
            "node_positions": positions,
            "overlap_count": pairs.len(),
            "overlapping_pairs": pairs,
        }))
    }
}
