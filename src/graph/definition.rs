use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a node graph, ready for layout.
/// This is the target structure for any custom host format conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
}

/// A single node of the graph: identity, placement, size, and its ordered pins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDefinition {
    pub id: String,
    /// Host node class, e.g. `event`, `functionEntry`, `callFunction`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    /// Intrinsic width. Zero or negative means unknown.
    #[serde(default)]
    pub width: i32,
    /// Intrinsic height. Zero or negative means unknown.
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub pins: Vec<PinDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PinDirection {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PinKind {
    /// Control-flow connector.
    Exec,
    /// Value connector.
    Data,
}

/// A connector on a node. Links may be declared on either end of a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDefinition {
    pub id: String,
    pub direction: PinDirection,
    pub kind: PinKind,
    #[serde(default)]
    pub linked_to: Vec<PinRef>,
}

/// Addresses a pin by its owning node id and its pin id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinRef {
    pub node: String,
    pub pin: String,
}

impl PinRef {
    pub fn new(node: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            pin: pin.into(),
        }
    }
}

impl GraphDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: NodeDefinition) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeDefinition> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Declares a link from `from`'s output pin to `to`'s input pin.
    /// The link is recorded on the output side only; the model mirrors it.
    /// Returns `false` if the source node or pin does not exist.
    pub fn link(&mut self, from: (&str, &str), to: (&str, &str)) -> bool {
        let Some(pin) = self
            .node_mut(from.0)
            .and_then(|n| n.pins.iter_mut().find(|p| p.id == from.1))
        else {
            return false;
        };
        pin.linked_to.push(PinRef::new(to.0, to.1));
        true
    }
}

impl NodeDefinition {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            pins: Vec::new(),
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_pin(mut self, pin: PinDefinition) -> Self {
        self.pins.push(pin);
        self
    }

    /// Adds an execution input pin named `exec` and an execution output pin named `then`.
    pub fn with_exec_flow(self) -> Self {
        self.with_pin(PinDefinition::exec_input("exec"))
            .with_pin(PinDefinition::exec_output("then"))
    }
}

impl PinDefinition {
    pub fn new(id: impl Into<String>, direction: PinDirection, kind: PinKind) -> Self {
        Self {
            id: id.into(),
            direction,
            kind,
            linked_to: Vec::new(),
        }
    }

    pub fn exec_input(id: impl Into<String>) -> Self {
        Self::new(id, PinDirection::Input, PinKind::Exec)
    }

    pub fn exec_output(id: impl Into<String>) -> Self {
        Self::new(id, PinDirection::Output, PinKind::Exec)
    }

    pub fn data_input(id: impl Into<String>) -> Self {
        Self::new(id, PinDirection::Input, PinKind::Data)
    }

    pub fn data_output(id: impl Into<String>) -> Self {
        Self::new(id, PinDirection::Output, PinKind::Data)
    }

    pub fn is_exec(&self) -> bool {
        self.kind == PinKind::Exec
    }
}
