use kindred::{FamilyGraph, LayoutOptions, Person, layout};

fn opts() -> LayoutOptions {
    LayoutOptions::default()
}

fn record<'a>(people: &'a [Person], id: &str) -> &'a Person {
    people.iter().find(|p| p.id == id).unwrap()
}

/// Three generations, two couples, a remarriage and a childless partner.
fn extended_family() -> Vec<Person> {
    vec![
        Person::new("grandpa")
            .with_partners(["grandma"])
            .with_children(["dad", "aunt"]),
        Person::new("grandma")
            .with_partners(["grandpa"])
            .with_children(["dad", "aunt"]),
        Person::new("dad")
            .with_partners(["mom", "stepmom"])
            .with_children(["me", "sis", "halfbro"]),
        Person::new("mom").with_partners(["dad"]).with_children(["me", "sis"]),
        Person::new("stepmom")
            .with_partners(["dad"])
            .with_children(["halfbro"]),
        Person::new("aunt").with_partners(["uncle"]),
        Person::new("uncle").with_partners(["aunt"]),
        Person::new("me").with_children(["kid"]),
        Person::new("sis"),
        Person::new("halfbro"),
        Person::new("kid"),
    ]
}

fn assert_layers_monotonic(g: &FamilyGraph) {
    for node in g.nodes() {
        for &c in &node.children {
            let child = &g.nodes()[c];
            assert!(
                child.layer > node.layer,
                "{} (layer {}) is not below its parent {} (layer {})",
                child.id,
                child.layer,
                node.id,
                node.layer
            );
        }
    }
}

fn assert_no_overlap(g: &FamilyGraph, opts: &LayoutOptions) {
    for layer in g.layers() {
        for pair in layer.windows(2) {
            let (a, b) = (&g.nodes()[pair[0]], &g.nodes()[pair[1]]);
            assert_eq!(a.position_in_layer + 1, b.position_in_layer);
            assert!(
                b.x - a.x >= opts.column_step(),
                "{} at {} overlaps {} at {}",
                b.id,
                b.x,
                a.id,
                a.x
            );
        }
    }
}

#[test]
fn layout_of_no_records_is_empty() {
    let mut people: Vec<Person> = Vec::new();
    let g = layout(&mut people, &opts());
    assert!(g.is_empty());
    assert_eq!(g.layer_count(), 0);
}

#[test]
fn layout_places_a_single_person_at_the_origin() {
    let mut people = vec![Person::new("solo")];
    let g = layout(&mut people, &opts());
    assert_eq!(g.node("solo").unwrap().layer, 0);
    assert_eq!(people[0].x, Some(0.0));
    assert_eq!(people[0].y, Some(0.0));
}

#[test]
fn layout_aligns_a_single_child_under_its_parent() {
    let mut people = vec![Person::new("a").with_children(["b"]), Person::new("b")];
    let g = layout(&mut people, &opts());

    assert_eq!(g.node("a").unwrap().layer, 0);
    assert_eq!(g.node("b").unwrap().layer, 1);
    assert_eq!(people[0].y, Some(0.0));
    assert_eq!(people[1].y, Some(150.0 + 20.0));
    assert_eq!(people[0].x, people[1].x);
}

#[test]
fn layout_centres_a_parent_over_two_children() {
    let mut people = vec![
        Person::new("a").with_children(["b", "c"]),
        Person::new("b"),
        Person::new("c"),
    ];
    let g = layout(&mut people, &opts());

    let layer_a = g.node("a").unwrap().layer;
    assert_eq!(g.node("b").unwrap().layer, layer_a + 1);
    assert_eq!(g.node("c").unwrap().layer, layer_a + 1);

    let (xa, xb, xc) = (
        people[0].x.unwrap(),
        people[1].x.unwrap(),
        people[2].x.unwrap(),
    );
    assert_eq!((xc - xb).abs(), 300.0 + 20.0);
    assert_eq!(xa, (xb + xc) / 2.0);
}

#[test]
fn layout_places_a_shared_child_one_below_its_highest_parent() {
    let mut people = vec![
        Person::new("g").with_children(["p"]),
        Person::new("p").with_children(["k"]),
        Person::new("k"),
        Person::new("p1").with_partners(["g"]).with_children(["c"]),
        Person::new("p2").with_partners(["g"]).with_children(["c"]),
        Person::new("c"),
    ];
    let g = layout(&mut people, &opts());
    let layer = |id: &str| g.node(id).unwrap().layer;
    assert_eq!(layer("c"), layer("p1").max(layer("p2")) + 1);
    assert_eq!(layer("p1"), 0);
}

#[test]
fn layout_places_a_shared_child_below_parents_of_different_generations() {
    let mut people = vec![
        Person::new("p1").with_children(["c", "x"]),
        Person::new("c"),
        Person::new("x").with_children(["y"]),
        Person::new("y"),
        Person::new("p2").with_children(["c"]),
    ];
    let g = layout(&mut people, &opts());
    let layer = |id: &str| g.node(id).unwrap().layer;
    assert_eq!(layer("p1"), 0);
    assert_eq!(layer("p2"), 1);
    assert_eq!(layer("c"), 2);
    assert_eq!(layer("c"), layer("p1").max(layer("p2")) + 1);
    assert_eq!(record(&people, "c").y, Some(2.0 * 170.0));
    assert_layers_monotonic(&g);
}

#[test]
fn layout_ignores_dangling_child_ids() {
    let mut people = vec![Person::new("a").with_children(["nobody"])];
    let g = layout(&mut people, &opts());
    assert!(g.node("a").unwrap().children.is_empty());
    assert!(g.node("nobody").is_none());
    assert_eq!(people[0].x, Some(0.0));
}

#[test]
fn layout_terminates_on_cycles_and_positions_everyone() {
    let mut people = vec![
        Person::new("a").with_children(["b"]),
        Person::new("b").with_children(["c"]),
        Person::new("c").with_children(["a"]),
        Person::new("d").with_children(["a"]),
    ];
    let g = layout(&mut people, &opts());
    assert_eq!(g.node_count(), 4);
    assert!(people.iter().all(|p| p.x.is_some() && p.y.is_some()));
    assert_no_overlap(&g, &opts());
}

#[test]
fn layout_keeps_children_below_parents() {
    let mut people = extended_family();
    let g = layout(&mut people, &opts());
    assert_layers_monotonic(&g);
    assert_eq!(g.node("grandpa").unwrap().layer, 0);
    assert_eq!(g.node("kid").unwrap().layer, 3);
}

#[test]
fn layout_never_overlaps_nodes_in_a_layer() {
    let o = opts();
    let mut people = extended_family();
    let g = layout(&mut people, &o);
    assert_no_overlap(&g, &o);
    assert!(g.nodes().iter().all(|n| n.x >= 0.0));
}

#[test]
fn layout_writes_coordinates_matching_the_graph() {
    let o = opts();
    let mut people = extended_family();
    let g = layout(&mut people, &o);
    for node in g.nodes() {
        let p = &people[node.index];
        assert_eq!(p.id, node.id);
        assert_eq!(p.x, Some(node.x));
        assert_eq!(p.y, Some(node.layer as f64 * o.row_step()));
    }
}

#[test]
fn layout_is_deterministic() {
    let mut first = extended_family();
    let mut second = extended_family();
    let g1 = layout(&mut first, &opts());
    let g2 = layout(&mut second, &opts());
    assert_eq!(first, second);
    assert_eq!(g1.nodes(), g2.nodes());
    assert_eq!(g1.layers(), g2.layers());
}

#[test]
fn layout_is_idempotent_on_laid_out_records() {
    let mut people = extended_family();
    layout(&mut people, &opts());
    let once = people.clone();
    layout(&mut people, &opts());
    assert_eq!(people, once);
}

#[test]
fn layout_clears_coordinates_of_shadowed_duplicates() {
    let mut stale = Person::new("a");
    stale.x = Some(999.0);
    stale.y = Some(999.0);
    let mut people = vec![stale, Person::new("a")];
    layout(&mut people, &opts());
    assert_eq!(people[0].x, None);
    assert_eq!(people[1].x, Some(0.0));
}

#[test]
fn layout_bounds_cover_every_node_box() {
    let o = opts();
    let mut people = vec![
        Person::new("a").with_children(["b", "c"]),
        Person::new("b"),
        Person::new("c"),
    ];
    let g = layout(&mut people, &o);
    let bounds = g.bounds(&o);
    assert_eq!(bounds.width, 320.0 + 300.0);
    assert_eq!(bounds.height, 170.0 + 150.0);
    assert_eq!(record(&people, "c").position().unwrap().x, 320.0);
}
