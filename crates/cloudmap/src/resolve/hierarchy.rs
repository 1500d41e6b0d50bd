//! Placing nodes inside areas.

use log::trace;

use cloudmap_core::model::{Area, Node};

/// Assigns every node to the smallest area whose ellipse contains its center.
///
/// Area size is ranked by `rx * ry`. When two containing areas rank equal,
/// the one that appears first in the table wins. Nodes that no area
/// contains stay unassigned.
///
/// Returns how many nodes were placed.
pub fn resolve_hierarchy(nodes: &mut [Node], areas: &mut [Area]) -> usize {
    let mut placed = 0;
    for node in nodes.iter_mut() {
        let center = node.center();
        let Some(area) = areas
            .iter_mut()
            .filter(|area| area.ellipse().contains(center))
            .min_by(|a, b| a.ellipse().size_rank().total_cmp(&b.ellipse().size_rank()))
        else {
            continue;
        };

        if node.set_area(area.id()) {
            area.add_node(node.id());
            placed += 1;
            trace!(node = node.id().to_string(), area = area.id().to_string(); "Node placed in area");
        }
    }
    placed
}
