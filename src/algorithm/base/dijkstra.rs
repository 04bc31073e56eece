use std::iter;
use hashbrown::{HashMap, HashSet};

use super::heap::{MyMinHeap, Priority};
use crate::network::{Cost, Network, NodeIndex, Route};


#[derive(Default)]
pub struct Dijkstra {
    dist: HashMap<NodeIndex, Cost>,
    pred: HashMap<NodeIndex, NodeIndex>,
    ignore_nodes: HashSet<NodeIndex>,
    ignore_edges: HashSet<(NodeIndex, NodeIndex)>,
}


impl Dijkstra {
    /// Settles nodes outward from `src` until `dst` is settled or the
    /// frontier runs dry. Equal costs settle in name order.
    pub fn compute_pair(&mut self, graph: &Network, src: NodeIndex, dst: NodeIndex) {
        self.dist.clear();
        self.pred.clear();
        let mut heap = MyMinHeap::new();
        let mut seen = HashMap::new();

        seen.insert(src, Cost::ZERO);
        heap.push(src, Priority::new((Cost::ZERO, graph.name(src))));

        while let Some((v, priority)) = heap.pop() {
            let (rv_dist, _) = priority.into_inner();
            match self.dist.contains_key(&v) {
                true  => { continue; },
                false => { self.dist.insert(v, rv_dist); },
            }
            if v == dst { break; }
            for edge in graph.outgoings(v) {
                let u = edge.ends().1;
                if self.ignore_nodes.contains(&u)
                    || self.ignore_edges.contains(&(v, u)) { continue; }

                let ru_dist = rv_dist + edge.cost();

                if self.dist.contains_key(&u) { continue; }
                if let Some(&best) = seen.get(&u) {
                    if ru_dist >= best { continue; }
                }

                self.pred.insert(u, v);
                seen.insert(u, ru_dist);
                let priority = Priority::new((ru_dist, graph.name(u)));
                match heap.get(&u) {
                    Some(_) => { heap.change_priority(&u, priority); },
                    None    => { heap.push(u, priority); },
                }
            }
        }
    }
    pub fn shortest_path(&self, src: NodeIndex, dst: NodeIndex) -> Option<Route> {
        if !self.dist.contains_key(&dst) {
            return None;
        }
        let mut path: Route = iter::successors(Some(dst), |&v| match v == src {
            true  => None,
            false => self.pred.get(&v).copied(),
        }).collect();
        path.reverse();
        debug_assert_eq!(path.first(), Some(&src));
        Some(path)
    }
    pub fn ignore(&mut self, nodes: HashSet<NodeIndex>, edges: HashSet<(NodeIndex, NodeIndex)>) {
        self.ignore_nodes = nodes;
        self.ignore_edges = edges;
    }
}
