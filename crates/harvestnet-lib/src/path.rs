use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{EdgeWeight, Graph, NodeId};

/// Single-source shortest-path distances over one edge weight.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    distances: Vec<Option<f64>>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Minimum total weight from the source to `node`, if reachable.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.distances.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }
}

/// Run Dijkstra's algorithm from `source`, visiting the whole graph.
///
/// Edge weights must be non-negative; the graph builder rejects anything else.
pub fn dijkstra(graph: &Graph, source: NodeId, weight: EdgeWeight) -> ShortestPaths {
    let node_count = graph.node_count();
    let mut distances: Vec<Option<f64>> = vec![None; node_count];
    let mut queue = BinaryHeap::new();

    if source < node_count {
        distances[source] = Some(0.0);
        queue.push(QueueEntry::new(source, 0.0));
    }

    while let Some(entry) = queue.pop() {
        let Some(current_distance) = distances[entry.node] else {
            continue;
        };
        if FloatOrd(current_distance) < entry.cost {
            continue;
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = current_distance + edge.attributes.weight(weight);
            let improves = distances[next].map_or(true, |known| next_cost < known);
            if improves {
                distances[next] = Some(next_cost);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    ShortestPaths { source, distances }
}

/// Walk a minimum-weight path from `start` to the source of `to_goal`.
///
/// `to_goal` must be a search rooted at the goal; because the graph is
/// undirected its distances are distances *to* the goal. An edge is on a
/// minimum-weight path when `distance(next) + weight == distance(current)`.
/// Such edges are tried in neighbour id order, so ties between equal-weight
/// paths resolve to the lexicographically smallest next location. Nodes are
/// entered at most once and dead ends are backed out of, which keeps the walk
/// finite when weights are too small to change a distance in floating point.
pub fn trace_path(
    graph: &Graph,
    to_goal: &ShortestPaths,
    start: NodeId,
    weight: EdgeWeight,
) -> Option<Vec<NodeId>> {
    let goal = to_goal.source;
    to_goal.distance(start)?;

    let mut entered = vec![false; graph.node_count()];
    entered[start] = true;
    // Each frame holds a node on the path and the next neighbour index to try.
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let current = frame.0;
        if current == goal {
            return Some(stack.iter().map(|&(node, _)| node).collect());
        }
        let current_distance = to_goal.distances[current]?;

        let edges = graph.neighbours(current);
        let tight = edges[frame.1..].iter().position(|edge| {
            let candidate = edge.target;
            !entered[candidate]
                && to_goal.distances[candidate].is_some_and(|candidate_distance| {
                    candidate_distance + edge.attributes.weight(weight) == current_distance
                })
        });

        match tight {
            Some(offset) => {
                let next = edges[frame.1 + offset].target;
                frame.1 += offset + 1;
                entered[next] = true;
                stack.push((next, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    None
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
