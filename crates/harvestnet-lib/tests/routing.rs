use harvestnet_lib::{
    build_graph, optimize_logistics, optimize_routes, route_key, topology_stats, NetworkBuilder,
    TransportLane,
};

fn lane(a: &str, b: &str, cost: f64, time: f64) -> TransportLane {
    TransportLane::new(a, b, cost, time, 100.0)
}

#[test]
fn cheapest_route_goes_through_intermediate_node() {
    let graph = build_graph(&[
        lane("A", "B", 2.0, 1.0),
        lane("B", "C", 3.0, 1.0),
        lane("A", "C", 10.0, 1.0),
    ])
    .expect("graph");
    let routes = optimize_routes(&graph);

    let route = &routes[&route_key("A", "C")];
    assert_eq!(route.path, vec!["A", "B", "C"]);
    assert_eq!(route.total_cost, 5.0);
    assert_eq!(route.hop_count(), 2);
    assert_eq!(routes.len(), 6, "every ordered pair of a connected triangle");
}

#[test]
fn total_time_is_independent_of_cost_path() {
    // Cost-optimal A-B-C takes 10 time units; the direct lane takes 4.
    let graph = build_graph(&[
        lane("A", "B", 2.0, 5.0),
        lane("B", "C", 3.0, 5.0),
        lane("A", "C", 10.0, 4.0),
    ])
    .expect("graph");
    let routes = optimize_routes(&graph);

    let route = &routes[&route_key("A", "C")];
    assert_eq!(route.path, vec!["A", "B", "C"]);
    assert_eq!(route.total_time, 4.0);
}

#[test]
fn reversed_route_has_identical_cost() {
    let graph = build_graph(&[
        lane("Farm", "Hub", 2.0, 1.0),
        lane("Hub", "Market", 3.5, 2.0),
        lane("Farm", "Depot", 1.0, 1.0),
        lane("Depot", "Market", 6.0, 1.0),
    ])
    .expect("graph");
    let routes = optimize_routes(&graph);

    for (key, route) in &routes {
        let origin = route.path.first().unwrap();
        let destination = route.path.last().unwrap();
        assert_eq!(key, &route_key(origin, destination));
        let reverse = &routes[&route_key(destination, origin)];
        assert_eq!(reverse.total_cost, route.total_cost, "{key}");
        assert_eq!(reverse.total_time, route.total_time, "{key}");
    }
}

#[test]
fn unreachable_pairs_are_omitted() {
    let graph = build_graph(&[lane("A", "B", 1.0, 1.0), lane("C", "D", 1.0, 1.0)])
        .expect("graph");
    let routes = optimize_routes(&graph);

    assert_eq!(routes.len(), 4);
    assert!(routes.contains_key("A-B"));
    assert!(routes.contains_key("D-C"));
    assert!(!routes.contains_key("A-C"));
    assert!(!routes.keys().any(|key| key == "A-A"));
}

#[test]
fn density_follows_closed_form() {
    let graph = build_graph(&[
        lane("A", "B", 1.0, 1.0),
        lane("B", "C", 1.0, 1.0),
        lane("C", "D", 1.0, 1.0),
    ])
    .expect("graph");
    let stats = topology_stats(&graph);

    assert_eq!(stats.node_count, 4);
    assert_eq!(stats.edge_count, 3);
    assert!((stats.density - 0.5).abs() < 1e-12);
    assert!((stats.average_degree - 1.5).abs() < 1e-12);
    assert_eq!(stats.average_clustering_coefficient, 0.0);
    assert_eq!(stats.connected_component_count, 1);
}

#[test]
fn single_node_graph_has_zero_density() {
    let graph = build_graph(&[lane("A", "A", 1.0, 1.0)]).expect("graph");
    let stats = topology_stats(&graph);
    assert_eq!(stats.node_count, 1);
    assert_eq!(stats.density, 0.0);
    assert!(optimize_routes(&graph).is_empty());
}

#[test]
fn empty_graph_yields_zeroed_stats() {
    let result = optimize_logistics(&NetworkBuilder::new().build());
    assert!(result.optimal_routes.is_empty());
    assert_eq!(result.network_stats.node_count, 0);
    assert_eq!(result.network_stats.average_degree, 0.0);
    assert_eq!(result.network_stats.connected_component_count, 0);
}

#[test]
fn clustering_coefficient_averages_over_nodes() {
    // Triangle A-B-C with pendant D on C: A=1, B=1, C=1/3, D=0.
    let graph = build_graph(&[
        lane("A", "B", 1.0, 1.0),
        lane("B", "C", 1.0, 1.0),
        lane("A", "C", 1.0, 1.0),
        lane("C", "D", 1.0, 1.0),
    ])
    .expect("graph");
    let stats = topology_stats(&graph);
    let expected = (1.0 + 1.0 + 1.0 / 3.0) / 4.0;
    assert!((stats.average_clustering_coefficient - expected).abs() < 1e-12);
}

#[test]
fn zero_cost_lane_tie_routes_through_smallest_location() {
    let graph = build_graph(&[
        lane("A", "B", 0.0, 1.0),
        lane("B", "Z", 1.0, 1.0),
        lane("A", "Z", 1.0, 1.0),
    ])
    .expect("graph");
    let routes = optimize_routes(&graph);

    let route = &routes[&route_key("A", "Z")];
    assert_eq!(route.path, vec!["A", "B", "Z"]);
    assert_eq!(route.total_cost, 1.0);
}

#[test]
fn costs_spanning_float_precision_still_terminate() {
    let graph = build_graph(&[
        lane("A", "Z", 1e16, 1.0),
        lane("B", "Z", 1e16, 1.0),
        lane("A", "B", 1.0, 1.0),
    ])
    .expect("graph");
    let routes = optimize_routes(&graph);

    assert_eq!(routes.len(), 6);
    for (key, route) in &routes {
        assert!(route.path.len() <= 3, "{key}: {:?}", route.path);
        assert_eq!(key, &route_key(&route.path[0], &route.path[route.path.len() - 1]));
    }
    assert_eq!(routes[&route_key("A", "Z")].total_cost, 1e16);
}
