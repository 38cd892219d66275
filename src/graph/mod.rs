mod graph;
mod road;

pub use graph::Graph;
pub use road::Road;
