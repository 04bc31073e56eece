mod cost;
mod topology;

pub use cost::{Cost, DISTANCE_RATE, DURATION_RATE};
pub use topology::{Edge, EdgeIndex, Network, Node, NodeIndex};

/// Node sequence of a path, without its cost.
pub type Route = Vec<NodeIndex>;

/// A simple path together with the sum of its edge costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub nodes: Route,
    pub cost: Cost,
}

impl Path {
    pub fn new(nodes: Route, cost: Cost) -> Self {
        Path { nodes, cost }
    }
}
