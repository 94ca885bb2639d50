//! Common test utilities for building graph definitions.
use seiri::prelude::*;

/// Creates the canonical event graph used across the layout tests.
///
/// `E -> A -> B` along execution links, with the pure node `P` feeding `A.Target`.
/// Every node starts at a scrambled position.
#[allow(dead_code)]
pub fn create_event_graph() -> GraphDefinition {
    let mut graph = GraphDefinition::new("EventGraph")
        .with_node(
            NodeDefinition::new("E", "event")
                .at(500, 300)
                .with_pin(PinDefinition::exec_output("then")),
        )
        .with_node(
            NodeDefinition::new("A", "callFunction")
                .at(20, 40)
                .with_exec_flow()
                .with_pin(PinDefinition::data_input("Target")),
        )
        .with_node(
            NodeDefinition::new("B", "callFunction")
                .at(-100, 900)
                .with_exec_flow(),
        )
        .with_node(
            NodeDefinition::new("P", "variableGet")
                .at(700, 700)
                .with_pin(PinDefinition::data_output("Value")),
        );
    graph.link(("E", "then"), ("A", "exec"));
    graph.link(("A", "then"), ("B", "exec"));
    graph.link(("P", "Value"), ("A", "Target"));
    graph
}

/// Two execution nodes with no entry point among them: each one loops back into
/// itself, so both have an incoming execution link.
///
/// `Left` sits at x=10 (y=300), `Right` at x=50 (y=100).
#[allow(dead_code)]
pub fn create_fragment_graph() -> GraphDefinition {
    let mut graph = GraphDefinition::new("Fragments")
        .with_node(
            NodeDefinition::new("Left", "callFunction")
                .at(10, 300)
                .with_exec_flow(),
        )
        .with_node(
            NodeDefinition::new("Right", "callFunction")
                .at(50, 100)
                .with_exec_flow(),
        );
    graph.link(("Left", "then"), ("Left", "exec"));
    graph.link(("Right", "then"), ("Right", "exec"));
    graph
}

/// An event that branches into `A` and `B`, both of which flow into `C`.
///
/// `A` starts below `B`, so a stable layout puts `B` on top.
#[allow(dead_code)]
pub fn create_branching_graph() -> GraphDefinition {
    let mut graph = GraphDefinition::new("Branching")
        .with_node(
            NodeDefinition::new("Start", "event")
                .with_pin(PinDefinition::exec_output("then_0"))
                .with_pin(PinDefinition::exec_output("then_1")),
        )
        .with_node(NodeDefinition::new("A", "callFunction").at(0, 500).with_exec_flow())
        .with_node(NodeDefinition::new("B", "callFunction").at(0, 100).with_exec_flow())
        .with_node(NodeDefinition::new("C", "callFunction").at(0, 0).with_exec_flow());
    graph.link(("Start", "then_0"), ("A", "exec"));
    graph.link(("Start", "then_1"), ("B", "exec"));
    graph.link(("A", "then"), ("C", "exec"));
    graph.link(("B", "then"), ("C", "exec"));
    graph
}

/// One event-driven call node with `count` pure getters all feeding it.
#[allow(dead_code)]
pub fn create_shared_consumer_graph(count: usize) -> GraphDefinition {
    let mut consumer = NodeDefinition::new("Call", "callFunction").with_exec_flow();
    for i in 0..count {
        consumer = consumer.with_pin(PinDefinition::data_input(format!("In{}", i)));
    }

    let mut graph = GraphDefinition::new("Shared")
        .with_node(
            NodeDefinition::new("Event", "event").with_pin(PinDefinition::exec_output("then")),
        )
        .with_node(consumer);
    graph.link(("Event", "then"), ("Call", "exec"));

    for i in 0..count {
        let id = format!("Get{}", i);
        graph.nodes.push(
            NodeDefinition::new(&id, "variableGet").with_pin(PinDefinition::data_output("Value")),
        );
        graph.link((id.as_str(), "Value"), ("Call", format!("In{}", i).as_str()));
    }
    graph
}

/// Wraps graphs into a blueprint and a store, the way the command layer sees them.
#[allow(dead_code)]
pub fn create_store(
    blueprint_name: &str,
    ubergraph_pages: Vec<GraphDefinition>,
    function_graphs: Vec<GraphDefinition>,
) -> GraphStore {
    let mut store = GraphStore::new();
    store.insert(BlueprintDocument {
        name: blueprint_name.to_string(),
        ubergraph_pages,
        function_graphs,
    });
    store
}

/// Renames a graph, keeping its nodes.
#[allow(dead_code)]
pub fn renamed(mut graph: GraphDefinition, name: &str) -> GraphDefinition {
    graph.name = name.to_string();
    graph
}
