//! Full layout pipeline: build, rank, normalize, order, position, write back.

use crate::graph::FamilyGraph;
use crate::model::Person;
use crate::options::LayoutOptions;
use crate::{normalize, order, position, rank};

/// Lay out `people` in place and return the relation graph.
///
/// Every record whose id owns a node gets `x`/`y`; records shadowed by a later duplicate id have
/// their coordinates cleared. An empty slice yields an empty graph.
pub fn layout(people: &mut [Person], opts: &LayoutOptions) -> FamilyGraph {
    if people.is_empty() {
        return FamilyGraph::default();
    }

    let timing_enabled = std::env::var("KINDRED_LAYOUT_TIMING")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    #[derive(Debug, Default, Clone)]
    struct LayoutTimings {
        total: std::time::Duration,
        build: std::time::Duration,
        rank: std::time::Duration,
        normalize: std::time::Duration,
        order: std::time::Duration,
        position: std::time::Duration,
    }

    let total_start = timing_enabled.then(std::time::Instant::now);
    let mut timings = LayoutTimings::default();

    let build_start = timing_enabled.then(std::time::Instant::now);
    let mut g = {
        let _span = tracing::debug_span!("build", records = people.len()).entered();
        FamilyGraph::from_people(people)
    };
    if let Some(s) = build_start {
        timings.build = s.elapsed();
    }

    let rank_start = timing_enabled.then(std::time::Instant::now);
    {
        let _span = tracing::debug_span!("rank").entered();
        rank::rank(&mut g);
    }
    if let Some(s) = rank_start {
        timings.rank = s.elapsed();
    }

    let normalize_start = timing_enabled.then(std::time::Instant::now);
    {
        let _span = tracing::debug_span!("normalize").entered();
        normalize::run(&mut g);
    }
    if let Some(s) = normalize_start {
        timings.normalize = s.elapsed();
    }

    let order_start = timing_enabled.then(std::time::Instant::now);
    {
        let _span = tracing::debug_span!("order").entered();
        order::order(&mut g);
    }
    if let Some(s) = order_start {
        timings.order = s.elapsed();
    }

    let position_start = timing_enabled.then(std::time::Instant::now);
    {
        let _span = tracing::debug_span!("position", iterations = opts.iterations).entered();
        position::position(&mut g, opts);
    }
    if let Some(s) = position_start {
        timings.position = s.elapsed();
    }

    write_back(&g, people);

    if let Some(s) = total_start {
        timings.total = s.elapsed();
        tracing::info!(
            nodes = g.node_count(),
            layers = g.layer_count(),
            total = ?timings.total,
            build = ?timings.build,
            rank = ?timings.rank,
            normalize = ?timings.normalize,
            order = ?timings.order,
            position = ?timings.position,
            "layout timings"
        );
    } else {
        tracing::debug!(
            nodes = g.node_count(),
            layers = g.layer_count(),
            "layout finished"
        );
    }

    g
}

fn write_back(g: &FamilyGraph, people: &mut [Person]) {
    for person in people.iter_mut() {
        person.x = None;
        person.y = None;
    }
    for node in g.nodes() {
        let person = &mut people[node.index];
        person.x = Some(node.x);
        person.y = Some(node.y);
    }
}
