use hashbrown::HashMap;
use tracing::trace;

use super::cost::Cost;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    fn new(ix: usize) -> Self {
        EdgeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeIndex {
    fn from(ix: usize) -> Self {
        EdgeIndex::new(ix)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    edges: Vec<EdgeIndex>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    ends: (NodeIndex, NodeIndex),
    distance: f64,
    duration: f64,
    cost: Cost,
}

impl Node {
    pub fn new(name: String) -> Self {
        Self { name, edges: vec![] }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Edge {
    pub fn new(ends: (NodeIndex, NodeIndex), distance: f64, duration: f64, cost: Cost) -> Self {
        Edge { ends, distance, duration, cost }
    }
    pub fn ends(&self) -> (NodeIndex, NodeIndex) {
        self.ends
    }
    pub fn distance(&self) -> f64 {
        self.distance
    }
    pub fn duration(&self) -> f64 {
        self.duration
    }
    pub fn cost(&self) -> Cost {
        self.cost
    }
}

/// Directed graph of named locations. Edges are only written through
/// [`Network::upsert_edge`], so each cost always matches its legs.
#[derive(Clone, Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    lookup: HashMap<String, NodeIndex>,
    links: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl Network {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.lookup.get(name).copied()
    }
    pub fn has_node(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }
    pub fn name(&self, node: NodeIndex) -> &str {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].name()
    }
    pub fn names(&self, route: &[NodeIndex]) -> Vec<&str> {
        route.iter().map(|&n| self.name(n)).collect()
    }
    pub fn edge(&self, origin: &str, destination: &str) -> Option<&Edge> {
        let ends = (self.node(origin)?, self.node(destination)?);
        self.edge_between(ends.0, ends.1)
    }
    pub fn edge_between(&self, origin: NodeIndex, destination: NodeIndex) -> Option<&Edge> {
        self.links.get(&(origin, destination))
            .map(|e| &self.edges[e.index()])
    }
    pub fn outgoings(&self, node: NodeIndex)
        -> impl Iterator<Item=&Edge> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].edges.iter()
            .map(move |&e| &self.edges[e.index()])
    }
    pub fn neighbors(&self, node: NodeIndex)
        -> impl Iterator<Item=NodeIndex> + '_ {
        self.outgoings(node).map(|edge| edge.ends.1)
    }
    /// Creates both endpoints when absent, then creates or overwrites the
    /// edge `origin -> destination`. Legs without a valid cost leave the
    /// network untouched and yield `None`.
    pub fn upsert_edge(&mut self, origin: &str, destination: &str,
                       distance: f64, duration: f64) -> Option<EdgeIndex> {
        let cost = Cost::from_legs(distance, duration)?;
        let ends = (self.add_node(origin), self.add_node(destination));
        let edge = Edge::new(ends, distance, duration, cost);
        let ix = match self.links.get(&ends) {
            Some(&ix) => {
                trace!(origin, destination, cost = %cost, "overwrite edge");
                self.edges[ix.index()] = edge;
                ix
            }
            None => {
                trace!(origin, destination, cost = %cost, "insert edge");
                let ix = EdgeIndex::new(self.edges.len());
                self.nodes[ends.0.index()].edges.push(ix);
                self.edges.push(edge);
                self.links.insert(ends, ix);
                ix
            }
        };
        Some(ix)
    }
    /// Sum of edge costs along `route`, absent when some hop has no edge.
    pub fn cost_along(&self, route: &[NodeIndex]) -> Option<Cost> {
        route.windows(2)
            .map(|ends| self.edge_between(ends[0], ends[1]).map(Edge::cost))
            .sum()
    }
    fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(ix) = self.node(name) {
            return ix;
        }
        let ix = NodeIndex::new(self.nodes.len());
        self.nodes.push(Node::new(name.to_owned()));
        self.lookup.insert(name.to_owned(), ix);
        ix
    }
}
