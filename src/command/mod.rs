//! JSON command surface over a `GraphStore`.
//!
//! Every command takes a JSON parameter object and answers with a JSON object that
//! carries `"success": true` plus its payload, or `"success": false` and an `"error"`
//! message. Commands never panic on bad input; every failure becomes a response.

use crate::error::CommandError;
use crate::graph::{GraphDefinition, GraphStore};
use crate::layout::LayoutEngine;
use ahash::AHashMap;
use serde_json::{Map, Value, json};

mod arrange;
mod info;

pub use arrange::AutoArrangeNodesCommand;
pub use info::GetGraphLayoutInfoCommand;

/// Graph used when a request names none.
pub const DEFAULT_GRAPH_NAME: &str = "EventGraph";

/// Defines the contract for a named, JSON-driven command.
pub trait Command: Send + Sync {
    fn name(&self) -> &str;

    /// Runs the command against already-parsed parameters.
    fn run(&self, store: &mut GraphStore, params: &Value) -> Result<Value, CommandError>;

    /// Cheap check that the parameters carry what `run` needs.
    fn validate_params(&self, params: &str) -> bool {
        parse_params(params)
            .and_then(|p| GraphTarget::from_params(&p))
            .is_ok()
    }

    /// Parses `params`, runs the command, and renders the JSON response.
    fn execute(&self, store: &mut GraphStore, params: &str) -> String {
        let result = parse_params(params).and_then(|p| self.run(store, &p));
        match result {
            Ok(payload) => success_response(payload),
            Err(e) => {
                tracing::warn!("Command '{}' failed: {}", self.name(), e);
                error_response(&e)
            }
        }
    }
}

/// The blueprint graph a request addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphTarget {
    pub blueprint_name: String,
    pub graph_name: String,
}

impl GraphTarget {
    pub fn from_params(params: &Value) -> Result<Self, CommandError> {
        let blueprint_name = params
            .get("blueprint_name")
            .and_then(Value::as_str)
            .ok_or(CommandError::MissingParameter("blueprint_name"))?
            .to_string();
        let graph_name = params
            .get("graph_name")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_GRAPH_NAME)
            .to_string();
        Ok(Self {
            blueprint_name,
            graph_name,
        })
    }

    pub fn resolve<'s>(&self, store: &'s GraphStore) -> Result<&'s GraphDefinition, CommandError> {
        store
            .blueprint(&self.blueprint_name)
            .ok_or_else(|| CommandError::BlueprintNotFound(self.blueprint_name.clone()))?
            .graph(&self.graph_name)
            .ok_or_else(|| self.graph_not_found())
    }

    pub fn resolve_mut<'s>(
        &self,
        store: &'s mut GraphStore,
    ) -> Result<&'s mut GraphDefinition, CommandError> {
        store
            .blueprint_mut(&self.blueprint_name)
            .ok_or_else(|| CommandError::BlueprintNotFound(self.blueprint_name.clone()))?
            .graph_mut(&self.graph_name)
            .ok_or_else(|| self.graph_not_found())
    }

    fn graph_not_found(&self) -> CommandError {
        CommandError::GraphNotFound {
            blueprint_name: self.blueprint_name.clone(),
            graph_name: self.graph_name.clone(),
        }
    }
}

/// Routes requests to commands by name.
pub struct CommandRegistry {
    commands: AHashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            commands: AHashMap::new(),
        }
    }

    /// A registry holding the layout commands, all sharing `engine`'s settings.
    pub fn with_layout_commands(engine: LayoutEngine) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AutoArrangeNodesCommand::new(engine.clone())));
        registry.register(Box::new(GetGraphLayoutInfoCommand::new(engine)));
        registry
    }

    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name().to_string(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| &**c)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Runs the command called `name` with a raw JSON parameter string.
    pub fn execute(&self, store: &mut GraphStore, name: &str, params: &str) -> String {
        match self.get(name) {
            Some(command) => {
                tracing::debug!("Executing command '{}'", name);
                command.execute(store, params)
            }
            None => error_response(&CommandError::UnknownCommand(name.to_string())),
        }
    }

    /// Handles a `{ "command": ..., "params": { ... } }` envelope.
    pub fn dispatch(&self, store: &mut GraphStore, request: &str) -> String {
        let Ok(envelope) = serde_json::from_str::<Value>(request) else {
            return error_response(&CommandError::InvalidParams);
        };
        let Some(name) = envelope.get("command").and_then(Value::as_str) else {
            return error_response(&CommandError::MissingParameter("command"));
        };
        let params = envelope
            .get("params")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        self.execute(store, name, &params.to_string())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_layout_commands(LayoutEngine::default())
    }
}

fn parse_params(params: &str) -> Result<Value, CommandError> {
    match serde_json::from_str::<Value>(params) {
        Ok(value @ Value::Object(_)) => Ok(value),
        _ => Err(CommandError::InvalidParams),
    }
}

fn success_response(payload: Value) -> String {
    let mut response = Map::new();
    response.insert("success".to_string(), Value::Bool(true));
    if let Value::Object(fields) = payload {
        response.extend(fields);
    }
    Value::Object(response).to_string()
}

fn error_response(error: &CommandError) -> String {
    json!({
        "success": false,
        "error": error.to_string(),
    })
    .to_string()
}
