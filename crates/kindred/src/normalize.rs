//! Flip ranked layers so the oldest generation is drawn first.
//!
//! After [`crate::rank`] leaves sit on layer 0; here `layer := max - layer` moves ancestors with
//! the longest descendant chains to layer 0 and leaves to the bottom.

use crate::graph::FamilyGraph;

pub fn run(g: &mut FamilyGraph) {
    let nodes = g.nodes_mut();
    let Some(max_layer) = nodes.iter().map(|n| n.layer).max() else {
        return;
    };
    for node in nodes.iter_mut() {
        node.layer = max_layer - node.layer;
    }
}
