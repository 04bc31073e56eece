pub mod dijkstra;
pub mod heap;
pub mod reachability;
pub mod yens;
