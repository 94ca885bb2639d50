use super::{Command, GraphTarget};
use crate::error::CommandError;
use crate::graph::GraphStore;
use crate::layout::LayoutEngine;
use serde_json::{Value, json};

/// `auto_arrange_nodes`: lays out one blueprint graph in place.
///
/// Parameters: `blueprint_name` (required), `graph_name` (defaults to `EventGraph`).
pub struct AutoArrangeNodesCommand {
    engine: LayoutEngine,
}

impl AutoArrangeNodesCommand {
    pub const NAME: &'static str = "auto_arrange_nodes";

    pub fn new(engine: LayoutEngine) -> Self {
        Self { engine }
    }
}

impl Command for AutoArrangeNodesCommand {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self, store: &mut GraphStore, params: &Value) -> Result<Value, CommandError> {
        let target = GraphTarget::from_params(params)?;
        let graph = target.resolve_mut(store)?;
        let plan = self.engine.arrange(graph)?;

        Ok(json!({
            "blueprint_name": target.blueprint_name,
            "graph_name": target.graph_name,
            "arranged_count": plan.arranged_count,
            "layer_count": plan.layer_count,
            "message": format!("Successfully arranged {} nodes", plan.arranged_count),
        }))
    }
}
