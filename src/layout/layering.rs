use super::classify::{Classification, NodeRole};
use crate::graph::{GraphModel, NodeIdx};
use std::collections::VecDeque;

/// Assigns each execution node its BFS distance from the root set.
///
/// Roots are enqueued in graph order and successors in pin-then-link order, so the
/// result only depends on the input ordering. Execution nodes the BFS never reaches
/// land in layer 0. Pure nodes get no layer.
pub(super) fn assign_layers(
    model: &GraphModel<'_>,
    classification: &Classification,
) -> Vec<Option<u32>> {
    let mut layers: Vec<Option<u32>> = vec![None; model.len()];
    let mut visited = vec![false; model.len()];
    let mut queue: VecDeque<(NodeIdx, u32)> = VecDeque::new();

    for &root in &classification.roots {
        if !visited[root] {
            visited[root] = true;
            queue.push_back((root, 0));
        }
    }

    while let Some((node, layer)) = queue.pop_front() {
        layers[node] = Some(layer);
        for next in model.exec_successors(node) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back((next, layer + 1));
            }
        }
    }

    let mut unreached = 0usize;
    for (idx, role) in classification.roles.iter().enumerate() {
        if *role != NodeRole::Pure && layers[idx].is_none() {
            layers[idx] = Some(0);
            unreached += 1;
        }
    }
    if unreached > 0 {
        tracing::debug!(
            "{} execution node(s) unreachable from any root, placed in layer 0",
            unreached
        );
    }

    layers
}
