use super::definition::GraphDefinition;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A blueprint asset as the command layer sees it: a named set of graphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintDocument {
    pub name: String,
    #[serde(default)]
    pub ubergraph_pages: Vec<GraphDefinition>,
    #[serde(default)]
    pub function_graphs: Vec<GraphDefinition>,
}

impl BlueprintDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Finds a graph by name, searching ubergraph pages before function graphs.
    pub fn graph(&self, graph_name: &str) -> Option<&GraphDefinition> {
        self.ubergraph_pages
            .iter()
            .chain(self.function_graphs.iter())
            .find(|g| g.name == graph_name)
    }

    pub fn graph_mut(&mut self, graph_name: &str) -> Option<&mut GraphDefinition> {
        self.ubergraph_pages
            .iter_mut()
            .chain(self.function_graphs.iter_mut())
            .find(|g| g.name == graph_name)
    }
}

/// The set of blueprints a command session operates on.
///
/// Constructed and owned by the caller and handed to commands explicitly.
#[derive(Debug, Default)]
pub struct GraphStore {
    blueprints: AHashMap<String, BlueprintDocument>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a JSON array of blueprint documents.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let documents: Vec<BlueprintDocument> = serde_json::from_str(&content)?;
        let mut store = Self::new();
        for document in documents {
            store.insert(document);
        }
        Ok(store)
    }

    /// Adds a blueprint, replacing any previous one with the same name.
    pub fn insert(&mut self, blueprint: BlueprintDocument) -> Option<BlueprintDocument> {
        self.blueprints.insert(blueprint.name.clone(), blueprint)
    }

    pub fn blueprint(&self, name: &str) -> Option<&BlueprintDocument> {
        self.blueprints.get(name)
    }

    pub fn blueprint_mut(&mut self, name: &str) -> Option<&mut BlueprintDocument> {
        self.blueprints.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    /// All blueprints, sorted by name.
    pub fn blueprints(&self) -> Vec<&BlueprintDocument> {
        let mut all: Vec<_> = self.blueprints.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}
