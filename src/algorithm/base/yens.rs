use hashbrown::HashSet;
use tracing::{debug, trace};

use super::dijkstra::Dijkstra;
use super::heap::{MyMinHeap, Priority};
use crate::network::{Cost, Network, NodeIndex, Path, Route};


/// Enumerates up to `k` loopless paths in ascending cost, equal costs
/// ordered by the node names along the path.
#[derive(Clone, Copy, Debug)]
pub struct Yens {
    k: usize,
}

impl Yens {
    pub fn new(k: usize) -> Self {
        Yens { k }
    }
    pub fn k_shortest_paths(&self, graph: &Network, src: NodeIndex, dst: NodeIndex) -> Vec<Path> {
        if self.k == 0 || src == dst { return vec![]; }

        let mut dijkstra = Dijkstra::default();
        dijkstra.compute_pair(graph, src, dst);
        let shortest = match dijkstra.shortest_path(src, dst) {
            Some(path) => path,
            None       => return vec![],  // src-dst exists no path at all
        };
        let mut list_a = vec![shortest];
        let mut accepted: HashSet<Route> = list_a.iter().cloned().collect();
        let mut heap_b: MyMinHeap<Route, (Cost, Vec<&str>)> = MyMinHeap::new();

        while list_a.len() < self.k {
            let prev = &list_a[list_a.len() - 1];
            for i in 0..prev.len() - 1 {
                let spur_node = prev[i];
                let root_path = &prev[..=i];

                // For example, if search for 4th shortest path with spur-node (2)
                // We should ignore edges (2)───(3), (2)───(5) and node (1)
                //
                // (1)───(2)───(3)───(4)  1st
                //  │     └────(5)───(4)  2nd
                //  └────(7)───(8)───(4)  3rd

                let ignored_edges = list_a.iter()
                    .filter(|path| path.len() > i + 1 && path[..=i] == *root_path)
                    .map(|path| (path[i], path[i + 1]))
                    .collect();
                let ignored_nodes = root_path[..i].iter()
                    .cloned()
                    .collect();

                let mut dijkstra = Dijkstra::default();
                dijkstra.ignore(ignored_nodes, ignored_edges);
                dijkstra.compute_pair(graph, spur_node, dst);

                let spur_path = match dijkstra.shortest_path(spur_node, dst) {
                    Some(spur_path) => spur_path,
                    None => continue,  // spur-dst exists no more paths
                };
                let mut total_path = root_path[..i].to_vec();
                total_path.extend(spur_path);
                if accepted.contains(&total_path) || heap_b.get(&total_path).is_some() {
                    continue;
                }
                let total_cost = match graph.cost_along(&total_path) {
                    Some(cost) => cost,
                    None => continue,
                };
                trace!(cost = %total_cost, hops = total_path.len() - 1, "candidate");
                let priority = Priority::new((total_cost, graph.names(&total_path)));
                heap_b.push(total_path, priority);
            }
            match heap_b.pop() {
                Some((path, _)) => {
                    accepted.insert(path.clone());
                    list_a.push(path);
                }
                None => break,  // src-dst exists no more paths
            }
        }
        debug!(found = list_a.len(), k = self.k, pending = heap_b.len(), "enumerated paths");

        let mut paths: Vec<Path> = list_a.into_iter()
            .filter_map(|nodes| graph.cost_along(&nodes).map(|cost| Path::new(nodes, cost)))
            .collect();
        paths.sort_by(|a, b| {
            (a.cost, graph.names(&a.nodes)).cmp(&(b.cost, graph.names(&b.nodes)))
        });
        paths
    }
}
