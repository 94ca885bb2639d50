use thiserror::Error;

/// Errors raised while indexing a `GraphDefinition` into a `GraphModel`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node at index {index} has an empty id")]
    EmptyNodeId { index: usize },

    #[error("Node id '{0}' appears more than once in the graph")]
    DuplicateNode(String),

    #[error("Node '{node_id}' declares pin '{pin_id}' more than once")]
    DuplicatePin { node_id: String, pin_id: String },

    #[error(
        "Pin '{source_node_id}.{source_pin_id}' links to '{target_node_id}.{target_pin_id}', which does not exist"
    )]
    DanglingLink {
        source_node_id: String,
        source_pin_id: String,
        target_node_id: String,
        target_pin_id: String,
    },

    #[error("Link between '{from}' and '{to}' is invalid: {message}")]
    InvalidLink {
        from: String,
        to: String,
        message: String,
    },
}

/// Errors raised by a `LayoutConfig` that cannot drive a layout pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse layout config: {0}")]
    ParseError(String),

    #[error("Could not read layout config '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Layout config field '{field}' must be positive, but was {value}")]
    NonPositive { field: &'static str, value: i32 },
}

/// Errors that stop a layout pass before any node is moved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    #[error("Invalid layout config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Errors that can occur when converting a custom host format into a `GraphDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphConversionError {
    #[error("Invalid custom graph data: {0}")]
    ValidationError(String),

    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),
}

/// Errors surfaced by the JSON command layer. Each one becomes an error response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid JSON parameters")]
    InvalidParams,

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Blueprint not found: {0}")]
    BlueprintNotFound(String),

    #[error("Graph not found: {graph_name} in Blueprint {blueprint_name}")]
    GraphNotFound {
        blueprint_name: String,
        graph_name: String,
    },

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
}
