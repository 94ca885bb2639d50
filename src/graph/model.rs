use super::definition::{GraphDefinition, NodeDefinition, PinDefinition, PinDirection};
use crate::error::GraphError;
use ahash::AHashMap;

/// Position of a node inside the `GraphDefinition` it was indexed from.
pub type NodeIdx = usize;

/// Addresses one pin of one node inside a `GraphModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinAddr {
    pub node: NodeIdx,
    pub pin: usize,
}

/// A validated, read-only view over a `GraphDefinition`.
///
/// Links are resolved to indices and mirrored, so every pin sees the pins it is
/// connected to no matter which endpoint declared the link. A pin's own declared
/// links come first, followed by links declared by other pins in node-then-pin order.
pub struct GraphModel<'a> {
    graph: &'a GraphDefinition,
    index: AHashMap<&'a str, NodeIdx>,
    // [node][pin] -> linked pins
    links: Vec<Vec<Vec<PinAddr>>>,
}

impl<'a> GraphModel<'a> {
    pub fn new(graph: &'a GraphDefinition) -> Result<Self, GraphError> {
        let mut index = AHashMap::with_capacity(graph.nodes.len());
        let mut pin_indices: Vec<AHashMap<&'a str, usize>> = Vec::with_capacity(graph.nodes.len());

        for (idx, node) in graph.nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(GraphError::EmptyNodeId { index: idx });
            }
            if index.insert(node.id.as_str(), idx).is_some() {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }

            let mut pins = AHashMap::with_capacity(node.pins.len());
            for (pin_idx, pin) in node.pins.iter().enumerate() {
                if pins.insert(pin.id.as_str(), pin_idx).is_some() {
                    return Err(GraphError::DuplicatePin {
                        node_id: node.id.clone(),
                        pin_id: pin.id.clone(),
                    });
                }
            }
            pin_indices.push(pins);
        }

        let mut links: Vec<Vec<Vec<PinAddr>>> = graph
            .nodes
            .iter()
            .map(|n| vec![Vec::new(); n.pins.len()])
            .collect();
        let mut mirrored = Vec::new();

        for (node_idx, node) in graph.nodes.iter().enumerate() {
            for (pin_idx, pin) in node.pins.iter().enumerate() {
                let from = PinAddr {
                    node: node_idx,
                    pin: pin_idx,
                };
                for target in &pin.linked_to {
                    let to = index
                        .get(target.node.as_str())
                        .and_then(|&n| {
                            pin_indices[n]
                                .get(target.pin.as_str())
                                .map(|&p| PinAddr { node: n, pin: p })
                        })
                        .ok_or_else(|| GraphError::DanglingLink {
                            source_node_id: node.id.clone(),
                            source_pin_id: pin.id.clone(),
                            target_node_id: target.node.clone(),
                            target_pin_id: target.pin.clone(),
                        })?;

                    Self::check_link(graph, from, to)?;

                    let own = &mut links[node_idx][pin_idx];
                    if !own.contains(&to) {
                        own.push(to);
                    }
                    mirrored.push((to, from));
                }
            }
        }

        for (at, back) in mirrored {
            let pin_links = &mut links[at.node][at.pin];
            if !pin_links.contains(&back) {
                pin_links.push(back);
            }
        }

        Ok(Self {
            graph,
            index,
            links,
        })
    }

    fn check_link(graph: &GraphDefinition, from: PinAddr, to: PinAddr) -> Result<(), GraphError> {
        let a = &graph.nodes[from.node].pins[from.pin];
        let b = &graph.nodes[to.node].pins[to.pin];
        let describe = |addr: PinAddr, pin: &PinDefinition| {
            format!("{}.{}", graph.nodes[addr.node].id, pin.id)
        };

        if a.direction == b.direction {
            let side = match a.direction {
                PinDirection::Input => "inputs",
                PinDirection::Output => "outputs",
            };
            return Err(GraphError::InvalidLink {
                from: describe(from, a),
                to: describe(to, b),
                message: format!("both pins are {}", side),
            });
        }
        if a.kind != b.kind {
            return Err(GraphError::InvalidLink {
                from: describe(from, a),
                to: describe(to, b),
                message: "execution links must join two execution pins".to_string(),
            });
        }
        Ok(())
    }

    pub fn definition(&self) -> &'a GraphDefinition {
        self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.nodes.is_empty()
    }

    pub fn node(&self, idx: NodeIdx) -> &'a NodeDefinition {
        &self.graph.nodes[idx]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIdx, &'a NodeDefinition)> + 'a {
        self.graph.nodes.iter().enumerate()
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub fn links(&self, addr: PinAddr) -> &[PinAddr] {
        &self.links[addr.node][addr.pin]
    }

    /// Pins of a node together with their resolved links, in declared order.
    pub fn pins(
        &self,
        node: NodeIdx,
    ) -> impl Iterator<Item = (&'a PinDefinition, &[PinAddr])> + '_ {
        self.graph.nodes[node]
            .pins
            .iter()
            .zip(self.links[node].iter().map(Vec::as_slice))
    }

    pub fn has_exec_pins(&self, node: NodeIdx) -> bool {
        self.graph.nodes[node].pins.iter().any(PinDefinition::is_exec)
    }

    /// True if any execution input pin of the node has a link.
    pub fn has_incoming_exec(&self, node: NodeIdx) -> bool {
        self.pins(node).any(|(pin, links)| {
            pin.is_exec() && pin.direction == PinDirection::Input && !links.is_empty()
        })
    }

    /// Distinct nodes reached through the node's execution output pins,
    /// in pin-then-link order.
    pub fn exec_successors(&self, node: NodeIdx) -> Vec<NodeIdx> {
        let mut successors = Vec::new();
        for (pin, links) in self.pins(node) {
            if !(pin.is_exec() && pin.direction == PinDirection::Output) {
                continue;
            }
            for link in links {
                if !successors.contains(&link.node) {
                    successors.push(link.node);
                }
            }
        }
        successors
    }

    /// The owner of the first pin linked to any of the node's output pins.
    pub fn first_consumer(&self, node: NodeIdx) -> Option<NodeIdx> {
        self.pins(node)
            .filter(|(pin, _)| pin.direction == PinDirection::Output)
            .find_map(|(_, links)| links.first().map(|l| l.node))
    }
}
