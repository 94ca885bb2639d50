use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for host data models that can be converted into a Seiri `GraphDefinition`.
///
/// This is the primary extension point for making Seiri format-agnostic. By implementing
/// this trait on your own editor structs, you provide a translation layer that allows the
/// layout engine to arrange graphs it knows nothing about.
///
/// # Example
///
/// ```rust,no_run
/// use seiri::prelude::*;
/// use seiri::error::GraphConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyNode { guid: String, class_name: String, pos: (i32, i32) }
/// struct MyGraph { nodes: Vec<MyNode> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyGraph {
///     fn into_graph(self) -> std::result::Result<GraphDefinition, GraphConversionError> {
///         let mut graph = GraphDefinition::new("EventGraph");
///         for node in self.nodes {
///             if node.guid.is_empty() {
///                 return Err(GraphConversionError::ValidationError("node without guid".into()));
///             }
///             graph.nodes.push(
///                 NodeDefinition::new(node.guid, node.class_name).at(node.pos.0, node.pos.1),
///             );
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a layout-ready graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}

impl IntoGraph for GraphDefinition {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        Ok(self)
    }
}

impl IntoGraph for &str {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        serde_json::from_str(self).map_err(|e| GraphConversionError::JsonParseError(e.to_string()))
    }
}

impl IntoGraph for serde_json::Value {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        serde_json::from_value(self)
            .map_err(|e| GraphConversionError::JsonParseError(e.to_string()))
    }
}
