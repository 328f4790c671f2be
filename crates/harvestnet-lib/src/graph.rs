use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::records::TransportLane;

/// Dense node index. Indices follow the lexicographic order of location
/// names, so comparing two ids compares their names.
pub type NodeId = usize;

/// Attribute used as the edge weight during shortest-path searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeWeight {
    Cost,
    Time,
}

/// Attributes carried by an undirected transport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeAttributes {
    pub cost: f64,
    pub time: f64,
    pub capacity: f64,
}

impl EdgeAttributes {
    pub fn weight(&self, weight: EdgeWeight) -> f64 {
        match weight {
            EdgeWeight::Cost => self.cost,
            EdgeWeight::Time => self.time,
        }
    }
}

/// Edge within the transport graph.
#[derive(Debug, Clone)]
pub struct Edge {
    pub target: NodeId,
    pub attributes: EdgeAttributes,
}

/// Immutable undirected transport graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Arc<Vec<String>>,
    adjacency: Arc<Vec<Vec<Edge>>>,
    edge_count: usize,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of distinct undirected edges, self loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Location name for a node identifier.
    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node]
    }

    /// Resolve a location name to its node identifier.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names
            .binary_search_by(|candidate| candidate.as_str().cmp(name))
            .ok()
    }

    /// Node identifiers in name order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        0..self.names.len()
    }

    /// Neighbours of a node, sorted by target id. A self loop appears once.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Attributes of the edge between two nodes, if any.
    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&EdgeAttributes> {
        let edges = self.neighbours(a);
        edges
            .binary_search_by(|edge| edge.target.cmp(&b))
            .ok()
            .map(|index| &edges[index].attributes)
    }

    /// Degree of a node; a self loop contributes two.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbours(node)
            .iter()
            .map(|edge| if edge.target == node { 2 } else { 1 })
            .sum()
    }
}

/// Accumulates transport lanes and yields an immutable [`Graph`].
///
/// Lanes are keyed by their unordered endpoint pair; a later lane for the same
/// pair replaces the attributes of an earlier one.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    edges: BTreeMap<(String, String), EdgeAttributes>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the edge described by `lane`.
    pub fn add_lane(&mut self, lane: &TransportLane) -> Result<&mut Self> {
        validate_weight(lane, "cost", lane.cost)?;
        validate_weight(lane, "time", lane.time)?;
        validate_weight(lane, "capacity", lane.capacity)?;

        let key = if lane.origin <= lane.destination {
            (lane.origin.clone(), lane.destination.clone())
        } else {
            (lane.destination.clone(), lane.origin.clone())
        };
        let attributes = EdgeAttributes {
            cost: lane.cost,
            time: lane.time,
            capacity: lane.capacity,
        };
        if let Some(previous) = self.edges.insert(key, attributes) {
            debug!(
                origin = %lane.origin,
                destination = %lane.destination,
                previous_cost = previous.cost,
                cost = lane.cost,
                "duplicate lane overwrote edge attributes"
            );
        }
        Ok(self)
    }

    pub fn build(self) -> Graph {
        let names: Vec<String> = self
            .edges
            .keys()
            .flat_map(|(a, b)| [a.clone(), b.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: HashMap<&str, NodeId> = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id))
            .collect();

        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); names.len()];
        for ((a, b), attributes) in &self.edges {
            let a = index[a.as_str()];
            let b = index[b.as_str()];
            adjacency[a].push(Edge {
                target: b,
                attributes: *attributes,
            });
            if a != b {
                adjacency[b].push(Edge {
                    target: a,
                    attributes: *attributes,
                });
            }
        }
        for edges in &mut adjacency {
            edges.sort_by_key(|edge| edge.target);
        }

        Graph {
            names: Arc::new(names),
            adjacency: Arc::new(adjacency),
            edge_count: self.edges.len(),
        }
    }
}

/// Build a transport graph from a sequence of lanes.
pub fn build_graph<'a, I>(lanes: I) -> Result<Graph>
where
    I: IntoIterator<Item = &'a TransportLane>,
{
    let mut builder = NetworkBuilder::new();
    for lane in lanes {
        builder.add_lane(lane)?;
    }
    Ok(builder.build())
}

fn validate_weight(lane: &TransportLane, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(Error::InvalidLane {
        origin: lane.origin.clone(),
        destination: lane.destination.clone(),
        message: format!("{field} must be finite and non-negative, got {value}"),
    })
}
