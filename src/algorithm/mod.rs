mod base;

pub use base::dijkstra::Dijkstra;
pub use base::reachability::{descendants, is_reachable};
pub use base::yens::Yens;
