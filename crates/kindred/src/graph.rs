//! Relation graph built from person records.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other by index, so the
//! parent/child/partner cycles of a family never turn into ownership cycles. The id lookup uses
//! `FxHashMap` like the rest of the layout code.

use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;

use crate::model::Person;
use crate::options::LayoutOptions;

/// Index of a node in [`FamilyGraph::nodes`].
pub type NodeIx = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    /// Position of the source record in the input slice.
    pub index: usize,
    pub owner: bool,
    pub children: Vec<NodeIx>,
    pub partners: Vec<NodeIx>,
    pub parents: Vec<NodeIx>,
    pub layer: usize,
    pub position_in_layer: usize,
    pub weight_in_layer: f64,
    pub x: f64,
    pub y: f64,
}

impl Node {
    fn new(id: &str, index: usize, owner: bool) -> Self {
        Self {
            id: id.to_string(),
            index,
            owner,
            children: Vec::new(),
            partners: Vec::new(),
            parents: Vec::new(),
            layer: 0,
            position_in_layer: 0,
            weight_in_layer: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Child,
    Partner,
}

/// A relation a renderer draws between two node boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link<'a> {
    pub kind: LinkKind,
    pub from: &'a str,
    pub to: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    nodes: Vec<Node>,
    node_index: HashMap<String, NodeIx>,
    layers: Vec<Vec<NodeIx>>,
}

impl FamilyGraph {
    /// Build the relation graph. Ids that do not name a record are dropped.
    pub fn from_people(people: &[Person]) -> Self {
        let mut g = Self::default();

        for (index, person) in people.iter().enumerate() {
            match g.node_index.get(person.id.as_str()) {
                Some(&ix) => {
                    tracing::warn!(
                        id = %person.id,
                        first = g.nodes[ix].index,
                        duplicate = index,
                        "duplicate person id; the later record replaces the earlier one"
                    );
                    let node = &mut g.nodes[ix];
                    node.index = index;
                    node.owner = person.owner;
                }
                None => {
                    g.node_index.insert(person.id.clone(), g.nodes.len());
                    g.nodes.push(Node::new(&person.id, index, person.owner));
                }
            }
        }

        for (index, person) in people.iter().enumerate() {
            let Some(&ix) = g.node_index.get(person.id.as_str()) else {
                continue;
            };
            if g.nodes[ix].index != index {
                // Shadowed duplicate: its relations belong to the record that won the id.
                continue;
            }

            for child_id in &person.children {
                let Some(&child) = g.node_index.get(child_id.as_str()) else {
                    tracing::trace!(from = %person.id, to = %child_id, "dropping dangling child id");
                    continue;
                };
                g.nodes[ix].children.push(child);
                g.nodes[child].parents.push(ix);
            }
            for partner_id in &person.partners {
                let Some(&partner) = g.node_index.get(partner_id.as_str()) else {
                    tracing::trace!(from = %person.id, to = %partner_id, "dropping dangling partner id");
                    continue;
                };
                g.nodes[ix].partners.push(partner);
            }
        }

        g
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn node_ix(&self, id: &str) -> Option<NodeIx> {
        self.node_index.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_ix(id).map(|ix| &self.nodes[ix])
    }

    /// The node of the record flagged as the tree owner, if any.
    pub fn owner(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.owner)
    }

    /// Nodes grouped by layer, each list in `position_in_layer` order.
    ///
    /// Empty until the crossing reducer has run. Intermediate layers can be empty when a partner
    /// pinned a node several generations above its children.
    pub fn layers(&self) -> &[Vec<NodeIx>] {
        &self.layers
    }

    pub(crate) fn set_layers(&mut self, layers: Vec<Vec<NodeIx>>) {
        self.layers = layers;
    }

    pub(crate) fn split_layers_mut(&mut self) -> (&mut [Node], &[Vec<NodeIx>]) {
        (&mut self.nodes, &self.layers)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Every parent→child and partner relation, in node order then list order.
    pub fn links(&self) -> Vec<Link<'_>> {
        let mut out = Vec::new();
        for node in &self.nodes {
            for &c in &node.children {
                out.push(Link {
                    kind: LinkKind::Child,
                    from: &node.id,
                    to: &self.nodes[c].id,
                });
            }
            for &p in &node.partners {
                out.push(Link {
                    kind: LinkKind::Partner,
                    from: &node.id,
                    to: &self.nodes[p].id,
                });
            }
        }
        out
    }

    /// Extent of the laid out diagram, node boxes included.
    pub fn bounds(&self, opts: &LayoutOptions) -> Bounds {
        if self.nodes.is_empty() {
            return Bounds::default();
        }
        let max_x = self.nodes.iter().map(|n| n.x).fold(f64::MIN, f64::max);
        let max_y = self.nodes.iter().map(|n| n.y).fold(f64::MIN, f64::max);
        Bounds {
            width: max_x + opts.node_width,
            height: max_y + opts.node_height,
        }
    }
}
