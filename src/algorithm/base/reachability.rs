use std::collections::VecDeque;
use hashbrown::HashSet;
use crate::network::{Network, NodeIndex};


/// Every node reachable from `root` by one or more edges. `root` itself is
/// only included when some cycle leads back to it.
pub fn descendants(graph: &Network, root: NodeIndex) -> HashSet<NodeIndex> {
    let mut seen = HashSet::new();
    let mut queue: VecDeque<NodeIndex> = graph.neighbors(root).collect();
    while let Some(v) = queue.pop_front() {
        if !seen.insert(v) { continue; }
        queue.extend(graph.neighbors(v).filter(|u| !seen.contains(u)));
    }
    seen
}

pub fn is_reachable(graph: &Network, origin: &str, destination: &str) -> bool {
    if origin == destination { return false; }
    match (graph.node(origin), graph.node(destination)) {
        (Some(src), Some(dst)) => descendants(graph, src).contains(&dst),
        _ => false,
    }
}
