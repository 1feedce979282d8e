//! Pixel coordinates from layers and in-layer positions.
//!
//! Starts from a plain grid, then alternates top-down and bottom-up relaxation: each node moves
//! to the mean `x` of its parents (resp. children) while a running lower bound keeps neighbours
//! in the same layer at least one column step apart.

use crate::graph::{FamilyGraph, Node, NodeIx};
use crate::options::LayoutOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toward {
    Parents,
    Children,
}

pub fn position(g: &mut FamilyGraph, opts: &LayoutOptions) {
    let (nodes, layers) = g.split_layers_mut();
    assign_grid(nodes, opts);

    let step = opts.column_step();
    for _ in 0..opts.iterations {
        for layer in layers.iter().skip(1) {
            relax_layer(nodes, layer, Toward::Parents, step);
        }
        for layer in layers.iter().rev().skip(1) {
            relax_layer(nodes, layer, Toward::Children, step);
        }
    }

    shift_to_origin(nodes, layers);
}

pub fn assign_grid(nodes: &mut [Node], opts: &LayoutOptions) {
    let (col, row) = (opts.column_step(), opts.row_step());
    for node in nodes.iter_mut() {
        node.x = col * node.position_in_layer as f64;
        node.y = row * node.layer as f64;
    }
}

fn relax_layer(nodes: &mut [Node], layer: &[NodeIx], toward: Toward, step: f64) {
    let mut min_x = 0.0_f64;
    for &v in layer {
        let neighbours = match toward {
            Toward::Parents => &nodes[v].parents,
            Toward::Children => &nodes[v].children,
        };
        let target = if neighbours.is_empty() {
            nodes[v].x
        } else {
            neighbours.iter().map(|&u| nodes[u].x).sum::<f64>() / neighbours.len() as f64
        };
        let x = target.max(min_x);
        nodes[v].x = x;
        min_x = x + step;
    }
}

/// Translate so the leftmost first-of-layer node sits at `x = 0`.
fn shift_to_origin(nodes: &mut [Node], layers: &[Vec<NodeIx>]) {
    let Some(min_x) = layers
        .iter()
        .filter_map(|layer| layer.first())
        .map(|&v| nodes[v].x)
        .min_by(f64::total_cmp)
    else {
        return;
    };
    for node in nodes.iter_mut() {
        node.x -= min_x;
    }
}
