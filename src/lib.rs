//! # Seiri - Auto-Layout for Execution Graphs
//!
//! **Seiri** arranges node-based execution graphs (event graphs, function graphs,
//! visual scripts) into a readable left-to-right flow. It reads pin topology and node
//! sizes, and writes node positions. It never creates or removes nodes.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Graph**: Deserialize a `GraphDefinition` from JSON, or implement the
//!     `IntoGraph` trait for your editor's own structs.
//! 2.  **Build an Engine**: Use `LayoutEngine::builder` to set spacing constants and to
//!     register which node kinds are entry points.
//! 3.  **Arrange**: `LayoutEngine::arrange` assigns BFS layers along execution links,
//!     stacks each layer vertically, and tucks pure (data-only) nodes next to the node
//!     that consumes them.
//! 4.  **Inspect**: `LayoutEngine::layout_info` lists positions and every pair of
//!     overlapping nodes.
//!
//! The `command` module wraps the same operations in JSON commands for remote tooling.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seiri::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = GraphDefinition::new("EventGraph")
//!         .with_node(
//!             NodeDefinition::new("BeginPlay", "event")
//!                 .with_pin(PinDefinition::exec_output("then")),
//!         )
//!         .with_node(NodeDefinition::new("PrintString", "callFunction").with_exec_flow()
//!             .with_pin(PinDefinition::data_input("InString")))
//!         .with_node(
//!             NodeDefinition::new("GetName", "callFunction")
//!                 .with_pin(PinDefinition::data_output("ReturnValue")),
//!         );
//!     graph.link(("BeginPlay", "then"), ("PrintString", "exec"));
//!     graph.link(("GetName", "ReturnValue"), ("PrintString", "InString"));
//!
//!     let engine = LayoutEngine::builder().build();
//!     let plan = engine.arrange(&mut graph)?;
//!     println!("{}", ReportFormatter::format_plan(&plan));
//!
//!     let info = engine.layout_info(&graph)?;
//!     assert!(info.overlapping_pairs.is_empty());
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod report;
