//! Generation assignment.
//!
//! Layers grow upwards at this stage: leaves sit on layer 0 and every parent is at least one
//! layer above each of its children. [`crate::normalize`] flips the numbering afterwards.

use crate::graph::{FamilyGraph, Node, NodeIx};

pub fn rank(g: &mut FamilyGraph) {
    let order = finish_order(g);
    let nodes = g.nodes_mut();
    seed_layers(nodes, &order);
    let passes = tighten(nodes, &order);
    tracing::trace!(passes, "layer tightening converged");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Depth-first finishing order over `children` edges.
///
/// Every root is tried in arena (input) order. A node is emitted only once all of its children
/// that could still be entered have been emitted. An edge into a node that is still on the stack
/// closes a cycle; it is reported and not followed.
pub fn finish_order(g: &FamilyGraph) -> Vec<NodeIx> {
    let nodes = g.nodes();
    let mut marks = vec![Mark::Unvisited; nodes.len()];
    let mut out: Vec<NodeIx> = Vec::with_capacity(nodes.len());
    // (node, index of the next child to look at)
    let mut stack: Vec<(NodeIx, usize)> = Vec::new();

    for root in 0..nodes.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            let Some(&child) = nodes[v].children.get(next) else {
                marks[v] = Mark::Finished;
                out.push(v);
                stack.pop();
                continue;
            };
            top.1 += 1;

            match marks[child] {
                Mark::Unvisited => {
                    marks[child] = Mark::InProgress;
                    stack.push((child, 0));
                }
                Mark::InProgress => {
                    tracing::warn!(
                        from = %nodes[v].id,
                        to = %nodes[child].id,
                        "cross edge: child relation loops back to an ancestor"
                    );
                }
                Mark::Finished => {}
            }
        }
    }

    out
}

/// First layering pass, in finishing order (children before parents).
pub fn seed_layers(nodes: &mut [Node], order: &[NodeIx]) {
    let mut assigned = vec![false; nodes.len()];

    for &v in order {
        let layer = if nodes[v].children.is_empty() {
            0
        } else {
            // A partner that is already placed pins this node to its generation.
            let mut layer = nodes[v]
                .partners
                .iter()
                .find(|&&p| assigned[p])
                .map(|&p| nodes[p].layer)
                .unwrap_or(1);
            for &c in &nodes[v].children {
                layer = layer.max(nodes[c].layer + 1);
            }
            layer
        };
        nodes[v].layer = layer;
        assigned[v] = true;
    }
}

/// Pull children up under their lowest parent until nothing moves.
///
/// Returns the number of full passes, the last of which changed nothing. A move only ever raises
/// a layer to below an existing parent layer, so the loop is bounded by the highest seed layer.
pub fn tighten(nodes: &mut [Node], order: &[NodeIx]) -> usize {
    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;

        for &v in order {
            let Some(min_parent) = nodes[v].parents.iter().map(|&p| nodes[p].layer).min() else {
                continue;
            };
            if min_parent > nodes[v].layer + 1 {
                nodes[v].layer = min_parent - 1;
                changed = true;
            }
        }

        if !changed {
            return passes;
        }
    }
}
