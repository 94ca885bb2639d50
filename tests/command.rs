//! Tests for the JSON command layer.
mod common;
use common::*;
use seiri::command::{AutoArrangeNodesCommand, GetGraphLayoutInfoCommand, GraphTarget};
use seiri::prelude::*;
use serde_json::{Value, json};

fn parse(response: &str) -> Value {
    serde_json::from_str(response).expect("Response should be valid JSON")
}

fn default_store() -> GraphStore {
    create_store("BP_Player", vec![create_event_graph()], vec![])
}

#[test]
fn test_auto_arrange_updates_the_store() {
    let registry = CommandRegistry::default();
    let mut store = default_store();

    let response = parse(&registry.execute(
        &mut store,
        "auto_arrange_nodes",
        r#"{"blueprint_name": "BP_Player", "graph_name": "EventGraph"}"#,
    ));

    assert_eq!(response["success"], json!(true));
    assert_eq!(response["blueprint_name"], json!("BP_Player"));
    assert_eq!(response["graph_name"], json!("EventGraph"));
    assert_eq!(response["arranged_count"], json!(4));
    assert_eq!(response["layer_count"], json!(3));
    assert_eq!(response["message"], json!("Successfully arranged 4 nodes"));

    let graph = store
        .blueprint("BP_Player")
        .and_then(|bp| bp.graph("EventGraph"))
        .unwrap();
    let b = graph.node("B").unwrap();
    assert_eq!((b.x, b.y), (700, 0));
}

#[test]
fn test_graph_name_defaults_to_event_graph() {
    let registry = CommandRegistry::default();
    let mut store = default_store();

    let response = parse(&registry.execute(
        &mut store,
        "auto_arrange_nodes",
        r#"{"blueprint_name": "BP_Player"}"#,
    ));
    assert_eq!(response["success"], json!(true));
    assert_eq!(response["graph_name"], json!("EventGraph"));
}

#[test]
fn test_function_graphs_are_searched() {
    let registry = CommandRegistry::default();
    let mut store = create_store(
        "BP_Door",
        vec![create_event_graph()],
        vec![renamed(create_branching_graph(), "OpenDoor")],
    );

    let response = parse(&registry.execute(
        &mut store,
        "auto_arrange_nodes",
        r#"{"blueprint_name": "BP_Door", "graph_name": "OpenDoor"}"#,
    ));
    assert_eq!(response["success"], json!(true));
    assert_eq!(response["arranged_count"], json!(4));

    let blueprint = store.blueprint("BP_Door").unwrap();
    let c = blueprint.graph("OpenDoor").unwrap().node("C").unwrap();
    assert_eq!((c.x, c.y), (700, 0));
    // The event graph was not touched.
    let e = blueprint.graph("EventGraph").unwrap().node("E").unwrap();
    assert_eq!((e.x, e.y), (500, 300));
}

#[test]
fn test_ubergraph_pages_take_precedence() {
    let registry = CommandRegistry::default();
    let mut store = create_store(
        "BP_Twin",
        vec![renamed(create_event_graph(), "Shared")],
        vec![renamed(create_branching_graph(), "Shared")],
    );

    let response = parse(&registry.execute(
        &mut store,
        "auto_arrange_nodes",
        r#"{"blueprint_name": "BP_Twin", "graph_name": "Shared"}"#,
    ));
    assert_eq!(response["success"], json!(true));

    let blueprint = store.blueprint("BP_Twin").unwrap();
    assert_eq!(blueprint.ubergraph_pages[0].node("E").unwrap().x, 0);
    // Function graph keeps its original positions.
    assert_eq!(blueprint.function_graphs[0].node("A").unwrap().y, 500);
}

#[test]
fn test_missing_blueprint_name() {
    let registry = CommandRegistry::default();
    let mut store = default_store();

    let response = parse(&registry.execute(
        &mut store,
        "auto_arrange_nodes",
        r#"{"graph_name": "EventGraph"}"#,
    ));
    assert_eq!(response["success"], json!(false));
    assert_eq!(
        response["error"],
        json!("Missing required parameter: blueprint_name")
    );
}

#[test]
fn test_invalid_json_parameters() {
    let registry = CommandRegistry::default();
    let mut store = default_store();

    for params in ["not json", "[1, 2]", ""] {
        let response = parse(&registry.execute(&mut store, "auto_arrange_nodes", params));
        assert_eq!(response["success"], json!(false));
        assert_eq!(response["error"], json!("Invalid JSON parameters"));
    }
}

#[test]
fn test_unknown_blueprint_and_graph() {
    let registry = CommandRegistry::default();
    let mut store = default_store();

    let response = parse(&registry.execute(
        &mut store,
        "auto_arrange_nodes",
        r#"{"blueprint_name": "BP_Missing"}"#,
    ));
    assert_eq!(response["success"], json!(false));
    assert_eq!(response["error"], json!("Blueprint not found: BP_Missing"));

    let response = parse(&registry.execute(
        &mut store,
        "get_graph_layout_info",
        r#"{"blueprint_name": "BP_Player", "graph_name": "Construction"}"#,
    ));
    assert_eq!(response["success"], json!(false));
    assert_eq!(
        response["error"],
        json!("Graph not found: Construction in Blueprint BP_Player")
    );
}

#[test]
fn test_layout_failure_leaves_graph_unchanged() {
    let registry = CommandRegistry::default();
    let broken = GraphDefinition::new("EventGraph")
        .with_node(NodeDefinition::new("A", "callFunction").at(10, 10).with_exec_flow())
        .with_node(NodeDefinition::new("A", "callFunction").at(20, 20).with_exec_flow());
    let mut store = create_store("BP_Broken", vec![broken.clone()], vec![]);

    let response = parse(&registry.execute(
        &mut store,
        "auto_arrange_nodes",
        r#"{"blueprint_name": "BP_Broken"}"#,
    ));
    assert_eq!(response["success"], json!(false));
    let message = response["error"].as_str().unwrap();
    assert!(message.starts_with("Layout failed:"), "got '{}'", message);
    assert!(message.contains("'A'"));

    let graph = store.blueprint("BP_Broken").unwrap().graph("EventGraph").unwrap();
    assert_eq!(graph, &broken);
}

#[test]
fn test_layout_info_response() {
    let registry = CommandRegistry::default();
    let mut store = default_store();
    registry.execute(&mut store, "auto_arrange_nodes", r#"{"blueprint_name": "BP_Player"}"#);

    let response = parse(&registry.execute(
        &mut store,
        "get_graph_layout_info",
        r#"{"blueprint_name": "BP_Player"}"#,
    ));
    assert_eq!(response["success"], json!(true));
    assert_eq!(response["node_count"], json!(4));
    assert_eq!(response["node_positions"]["A"], json!({"x": 350, "y": 0}));
    assert_eq!(response["node_positions"]["P"], json!({"x": 150, "y": -50}));
    assert_eq!(response["overlap_count"], json!(1));
    assert_eq!(response["overlapping_pairs"], json!([["E", "P"]]));
}

#[test]
fn test_layout_info_does_not_mutate() {
    let registry = CommandRegistry::default();
    let mut store = default_store();

    registry.execute(&mut store, "get_graph_layout_info", r#"{"blueprint_name": "BP_Player"}"#);
    let graph = store.blueprint("BP_Player").unwrap().graph("EventGraph").unwrap();
    assert_eq!(graph, &create_event_graph());
}

#[test]
fn test_dispatch_envelope() {
    let registry = CommandRegistry::default();
    let mut store = default_store();

    let response = parse(&registry.dispatch(
        &mut store,
        r#"{"command": "auto_arrange_nodes", "params": {"blueprint_name": "BP_Player"}}"#,
    ));
    assert_eq!(response["success"], json!(true));
    assert_eq!(response["arranged_count"], json!(4));

    let response = parse(&registry.dispatch(&mut store, r#"{"params": {}}"#));
    assert_eq!(response["error"], json!("Missing required parameter: command"));

    let response = parse(&registry.dispatch(&mut store, "{"));
    assert_eq!(response["error"], json!("Invalid JSON parameters"));

    // No params object at all still reaches the command.
    let response = parse(&registry.dispatch(&mut store, r#"{"command": "get_graph_layout_info"}"#));
    assert_eq!(
        response["error"],
        json!("Missing required parameter: blueprint_name")
    );
}

#[test]
fn test_unknown_command() {
    let registry = CommandRegistry::default();
    let mut store = default_store();

    let response = parse(&registry.execute(&mut store, "delete_everything", "{}"));
    assert_eq!(response["success"], json!(false));
    assert_eq!(response["error"], json!("Unknown command: delete_everything"));
}

#[test]
fn test_registry_names_and_lookup() {
    let registry = CommandRegistry::default();
    assert_eq!(
        registry.names(),
        vec!["auto_arrange_nodes", "get_graph_layout_info"]
    );
    assert!(registry.get(AutoArrangeNodesCommand::NAME).is_some());
    assert!(registry.get("nope").is_none());

    let empty = CommandRegistry::new();
    assert!(empty.names().is_empty());
}

#[test]
fn test_validate_params() {
    let command = GetGraphLayoutInfoCommand::new(LayoutEngine::default());
    assert!(command.validate_params(r#"{"blueprint_name": "BP_Player"}"#));
    assert!(!command.validate_params(r#"{"graph_name": "EventGraph"}"#));
    assert!(!command.validate_params("nonsense"));
}

#[test]
fn test_commands_share_engine_settings() {
    let config = LayoutConfig {
        horizontal_spacing: 500,
        ..LayoutConfig::default()
    };
    let engine = LayoutEngine::builder().with_config(config).build();
    let registry = CommandRegistry::with_layout_commands(engine);
    let mut store = default_store();

    registry.execute(&mut store, "auto_arrange_nodes", r#"{"blueprint_name": "BP_Player"}"#);
    let response = parse(&registry.execute(
        &mut store,
        "get_graph_layout_info",
        r#"{"blueprint_name": "BP_Player"}"#,
    ));
    assert_eq!(response["node_positions"]["B"], json!({"x": 1000, "y": 0}));
}

#[test]
fn test_graph_target_from_params() {
    let target = GraphTarget::from_params(&json!({"blueprint_name": "BP", "graph_name": "Fn"})).unwrap();
    assert_eq!(target.blueprint_name, "BP");
    assert_eq!(target.graph_name, "Fn");

    let target = GraphTarget::from_params(&json!({"blueprint_name": "BP"})).unwrap();
    assert_eq!(target.graph_name, "EventGraph");

    assert_eq!(
        GraphTarget::from_params(&json!({"blueprint_name": 7})),
        Err(CommandError::MissingParameter("blueprint_name"))
    );
}

#[test]
fn test_store_from_file() {
    let path = std::env::temp_dir().join("seiri_store_from_file.json");
    let documents = vec![BlueprintDocument {
        name: "BP_File".to_string(),
        ubergraph_pages: vec![create_event_graph()],
        function_graphs: vec![],
    }];
    std::fs::write(&path, serde_json::to_string(&documents).unwrap()).unwrap();

    let mut store = GraphStore::from_file(&path).expect("Failed to load store");
    assert_eq!(store.len(), 1);

    let registry = CommandRegistry::default();
    let response = parse(&registry.execute(&mut store, "auto_arrange_nodes", r#"{"blueprint_name": "BP_File"}"#));
    assert_eq!(response["arranged_count"], json!(4));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_layout_info_handles_far_away_nodes() {
    let registry = CommandRegistry::default();
    let far = GraphDefinition::new("EventGraph")
        .with_node(NodeDefinition::new("Edge", "callFunction").at(i32::MAX - 10, 0));
    let mut store = create_store("BP_Far", vec![far], vec![]);

    let response = parse(&registry.execute(
        &mut store,
        "get_graph_layout_info",
        r#"{"blueprint_name": "BP_Far"}"#,
    ));
    assert_eq!(response["success"], json!(true));
    assert_eq!(response["node_positions"]["Edge"]["x"], json!(i32::MAX - 10));
    assert_eq!(response["overlap_count"], json!(0));
}
