//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the seiri crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use seiri::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph_json = std::fs::read_to_string("path/to/graph.json")?;
//! let mut graph = graph_json.as_str().into_graph()?;
//!
//! let engine = LayoutEngine::builder()
//!     .with_config(LayoutConfig::from_file("path/to/layout.json")?)
//!     .build();
//! let plan = engine.arrange(&mut graph)?;
//!
//! println!("{}", ReportFormatter::format_plan(&plan));
//! # Ok(())
//! # }
//! ```

// Layout engine
pub use crate::config::LayoutConfig;
pub use crate::layout::{
    LayoutEngine, LayoutEngineBuilder, LayoutInfo, LayoutPlan, NodeRole, PlannedNode, Position,
};

// Graph model
pub use crate::graph::{
    BlueprintDocument, GraphDefinition, GraphModel, GraphStore, IntoGraph, NodeDefinition,
    PinDefinition, PinDirection, PinKind, PinRef,
};

// Commands
pub use crate::command::{Command, CommandRegistry};

// Error types
pub use crate::error::{CommandError, ConfigError, GraphConversionError, GraphError, LayoutError};

// Report formatting
pub use crate::report::ReportFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
