use crate::config::LayoutConfig;
use crate::graph::{GraphModel, NodeIdx};
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A node's top-left corner in graph space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Working state of the placement phase. Starts from the nodes' current positions
/// and is overwritten as nodes get placed.
pub(super) struct Placement<'m, 'a> {
    model: &'m GraphModel<'a>,
    config: &'m LayoutConfig,
    pub(super) positions: Vec<Position>,
    pub(super) arranged: usize,
}

impl<'m, 'a> Placement<'m, 'a> {
    pub(super) fn new(model: &'m GraphModel<'a>, config: &'m LayoutConfig) -> Self {
        let positions = model
            .nodes()
            .map(|(_, node)| Position::new(node.x, node.y))
            .collect();
        Self {
            model,
            config,
            positions,
            arranged: 0,
        }
    }

    /// Columns by layer, rows by original Y. Returns the number of layers used.
    pub(super) fn place_execution_nodes(&mut self, layers: &[Option<u32>]) -> usize {
        let groups = layers
            .iter()
            .enumerate()
            .filter_map(|(idx, layer)| layer.map(|l| (l, idx)))
            .into_group_map();

        let mut layer_count = 0;
        for (layer, mut nodes) in groups.into_iter().sorted_by_key(|(layer, _)| *layer) {
            // Stable: equal Y keeps graph order.
            nodes.sort_by_key(|&idx| self.model.node(idx).y);

            let x = saturating_step(layer as usize, self.config.horizontal_spacing);
            for (row, idx) in nodes.into_iter().enumerate() {
                let y = saturating_step(row, self.config.vertical_spacing);
                self.positions[idx] = Position::new(x, y);
                self.arranged += 1;
            }
            layer_count += 1;
        }
        layer_count
    }

    /// Stacks each pure node against its first consumer, or in the orphan column.
    /// Consumers are read from the working positions, so a consumer that is itself
    /// pure contributes its new position only if it was placed earlier.
    pub(super) fn place_pure_nodes(&mut self, pure: &[NodeIdx]) -> usize {
        let mut stacks: AHashMap<NodeIdx, usize> = AHashMap::new();
        let mut orphans = 0;

        for &idx in pure {
            match self.model.first_consumer(idx) {
                Some(consumer) => {
                    let anchor = self.positions[consumer];
                    let stack_index = stacks.entry(consumer).or_insert(0);
                    self.positions[idx] = Position::new(
                        anchor.x.saturating_add(self.config.pure_offset_x),
                        anchor
                            .y
                            .saturating_add(self.config.pure_offset_y)
                            .saturating_sub(saturating_step(
                                *stack_index,
                                self.config.pure_vertical_gap,
                            )),
                    );
                    *stack_index += 1;
                }
                None => {
                    self.positions[idx] = Position::new(
                        self.config.orphan_column_x,
                        saturating_step(orphans, self.config.pure_vertical_gap),
                    );
                    orphans += 1;
                }
            }
            self.arranged += 1;
        }
        orphans
    }
}

/// `index * spacing`, clamped to the `i32` range.
fn saturating_step(index: usize, spacing: i32) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(spacing)
}
