//! All-pairs route optimisation and topology statistics.
//!
//! For every ordered pair of distinct locations the optimiser reports the
//! minimum-cost path together with its cost, and the minimum transit time
//! between the same pair. The time is computed as an independent search over
//! the `time` weight, so it may belong to a different path than `path`.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::path::{dijkstra, trace_path, ShortestPaths};

/// Optimal route between two locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub total_cost: f64,
    pub total_time: f64,
}

impl Route {
    /// Number of lanes travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Whole-graph topology summary.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TopologyStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub average_degree: f64,
    pub density: f64,
    pub average_clustering_coefficient: f64,
    pub connected_component_count: usize,
}

/// Routing section of the supply chain report.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct LogisticsOptimization {
    pub optimal_routes: BTreeMap<String, Route>,
    pub network_stats: TopologyStats,
}

/// Map key used for the route between `origin` and `destination`.
pub fn route_key(origin: &str, destination: &str) -> String {
    format!("{origin}-{destination}")
}

/// Compute routes and topology statistics over `graph`.
pub fn optimize_logistics(graph: &Graph) -> LogisticsOptimization {
    let optimal_routes = optimize_routes(graph);
    let network_stats = topology_stats(graph);
    info!(
        nodes = network_stats.node_count,
        edges = network_stats.edge_count,
        routes = optimal_routes.len(),
        "optimised logistics routes"
    );
    LogisticsOptimization {
        optimal_routes,
        network_stats,
    }
}

/// Compute the optimal route for every reachable ordered pair of distinct
/// locations. Unreachable pairs are omitted.
pub fn optimize_routes(graph: &Graph) -> BTreeMap<String, Route> {
    let cost_trees: Vec<ShortestPaths> = graph
        .nodes()
        .map(|node| dijkstra(graph, node, EdgeWeight::Cost))
        .collect();

    let mut routes = BTreeMap::new();
    for origin in graph.nodes() {
        let time_tree = dijkstra(graph, origin, EdgeWeight::Time);
        for destination in graph.nodes() {
            if origin == destination {
                continue;
            }
            if let Some(route) = build_route(graph, &cost_trees[destination], &time_tree, origin)
            {
                routes.insert(
                    route_key(graph.name(origin), graph.name(destination)),
                    route,
                );
            }
        }
    }

    debug!(routes = routes.len(), "computed all-pairs routes");
    routes
}

fn build_route(
    graph: &Graph,
    cost_to_goal: &ShortestPaths,
    time_from_origin: &ShortestPaths,
    origin: NodeId,
) -> Option<Route> {
    let goal = cost_to_goal.source();
    let total_cost = cost_to_goal.distance(origin)?;
    let total_time = time_from_origin.distance(goal)?;
    let path = trace_path(graph, cost_to_goal, origin, EdgeWeight::Cost)?;

    Some(Route {
        path: path.iter().map(|&node| graph.name(node).to_string()).collect(),
        total_cost,
        total_time,
    })
}

/// Compute topology statistics; an empty graph yields all zeros.
pub fn topology_stats(graph: &Graph) -> TopologyStats {
    let node_count = graph.node_count();
    if node_count == 0 {
        return TopologyStats::default();
    }

    let edge_count = graph.edge_count();
    let n = node_count as f64;
    let e = edge_count as f64;
    let density = if node_count > 1 {
        2.0 * e / (n * (n - 1.0))
    } else {
        0.0
    };
    let average_clustering_coefficient =
        graph.nodes().map(|node| local_clustering(graph, node)).sum::<f64>() / n;

    TopologyStats {
        node_count,
        edge_count,
        average_degree: 2.0 * e / n,
        density,
        average_clustering_coefficient,
        connected_component_count: connected_components(graph),
    }
}

/// Fraction of neighbour pairs that are themselves connected. Self loops are
/// ignored; nodes with fewer than two neighbours score zero.
fn local_clustering(graph: &Graph, node: NodeId) -> f64 {
    let neighbours: Vec<NodeId> = graph
        .neighbours(node)
        .iter()
        .map(|edge| edge.target)
        .filter(|&target| target != node)
        .collect();
    let k = neighbours.len();
    if k < 2 {
        return 0.0;
    }

    let mut triangles = 0usize;
    for (i, &u) in neighbours.iter().enumerate() {
        for &w in &neighbours[i + 1..] {
            if graph.edge(u, w).is_some() {
                triangles += 1;
            }
        }
    }

    2.0 * triangles as f64 / (k * (k - 1)) as f64
}

fn connected_components(graph: &Graph) -> usize {
    let mut sets = DisjointSet::new(graph.node_count());
    for node in graph.nodes() {
        for edge in graph.neighbours(node) {
            sets.union(node, edge.target);
        }
    }
    sets.count()
}

struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            count: size,
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        self.count -= 1;
    }

    fn count(&self) -> usize {
        self.count
    }
}
