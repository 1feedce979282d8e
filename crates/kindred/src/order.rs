//! Crossing reduction within layers (barycenter method).
//!
//! This is a single top-down sweep: for each layer `l >= 1` the layer *above* it (`l - 1`) is
//! reordered by the mean position of its members' parents. The deepest layer keeps its grouping
//! order.

use crate::graph::{FamilyGraph, Node, NodeIx};

/// Group node indices by layer, in arena order, and record each node's index in its group.
pub fn group_by_layer(nodes: &mut [Node]) -> Vec<Vec<NodeIx>> {
    let mut layers: Vec<Vec<NodeIx>> = Vec::new();
    for (ix, node) in nodes.iter_mut().enumerate() {
        if node.layer >= layers.len() {
            layers.resize_with(node.layer + 1, Vec::new);
        }
        node.position_in_layer = layers[node.layer].len();
        layers[node.layer].push(ix);
    }
    layers
}

/// Barycenter weight of a node from its parents' positions.
///
/// The divisor counts the node itself, so a parentless node weighs `0.0`.
pub fn barycenter(nodes: &[Node], v: NodeIx) -> f64 {
    let parents = &nodes[v].parents;
    let total: f64 = parents
        .iter()
        .map(|&p| nodes[p].position_in_layer as f64)
        .sum();
    total / (parents.len() + 1) as f64
}

fn sort_layer(nodes: &mut [Node], layer: &mut [NodeIx]) {
    for &v in layer.iter() {
        nodes[v].weight_in_layer = barycenter(nodes, v);
    }
    // `sort_by` is stable, so equal weights keep their previous relative order.
    layer.sort_by(|&a, &b| nodes[a].weight_in_layer.total_cmp(&nodes[b].weight_in_layer));
    for (pos, &v) in layer.iter().enumerate() {
        nodes[v].position_in_layer = pos;
    }
}

pub fn order(g: &mut FamilyGraph) {
    let nodes = g.nodes_mut();
    let mut layers = group_by_layer(nodes);
    for l in 1..layers.len() {
        sort_layer(nodes, &mut layers[l - 1]);
    }
    g.set_layers(layers);
}
