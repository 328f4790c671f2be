use harvestnet_lib::{build_graph, Error, NetworkBuilder, TransportLane};

#[test]
fn builder_yields_undirected_edges() {
    let graph = build_graph(&[TransportLane::new("Farm", "Hub", 2.0, 3.0, 40.0)]).expect("graph");

    let farm = graph.node_id("Farm").expect("farm node");
    let hub = graph.node_id("Hub").expect("hub node");
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge(farm, hub), graph.edge(hub, farm));
    let attributes = graph.edge(hub, farm).expect("edge");
    assert_eq!(attributes.cost, 2.0);
    assert_eq!(attributes.time, 3.0);
    assert_eq!(attributes.capacity, 40.0);
}

#[test]
fn later_lane_overwrites_reversed_duplicate() {
    let mut builder = NetworkBuilder::new();
    builder
        .add_lane(&TransportLane::new("A", "B", 2.0, 1.0, 10.0))
        .expect("first lane");
    builder
        .add_lane(&TransportLane::new("B", "A", 7.0, 4.0, 20.0))
        .expect("second lane");
    let graph = builder.build();

    assert_eq!(graph.edge_count(), 1);
    let a = graph.node_id("A").unwrap();
    let b = graph.node_id("B").unwrap();
    let attributes = graph.edge(a, b).expect("edge");
    assert_eq!(attributes.cost, 7.0);
    assert_eq!(attributes.capacity, 20.0);
}

#[test]
fn node_ids_follow_name_order() {
    let graph = build_graph(&[
        TransportLane::new("Zeta", "Alpha", 1.0, 1.0, 1.0),
        TransportLane::new("Mid", "Alpha", 1.0, 1.0, 1.0),
    ])
    .expect("graph");
    let names: Vec<&str> = graph.nodes().map(|id| graph.name(id)).collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}

#[test]
fn self_lane_counts_twice_toward_degree() {
    let graph = build_graph(&[
        TransportLane::new("A", "A", 1.0, 1.0, 1.0),
        TransportLane::new("A", "B", 1.0, 1.0, 1.0),
    ])
    .expect("graph");
    let a = graph.node_id("A").unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.degree(a), 3);
}

#[test]
fn negative_cost_is_rejected() {
    let error = build_graph(&[TransportLane::new("A", "B", -1.0, 1.0, 1.0)])
        .expect_err("negative cost");
    assert!(matches!(error, Error::InvalidLane { .. }));
    assert!(error.to_string().contains("cost"));
}

#[test]
fn empty_lane_set_builds_empty_graph() {
    let graph = NetworkBuilder::new().build();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbours(0).is_empty());
}
