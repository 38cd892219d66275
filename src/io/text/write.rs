use std::fmt::Write;

use crate::graph::Graph;

/// Render every town's adjacency list as `Town i: (to, length) ...;`, one town per line.
pub fn roads_listing(graph: &Graph) -> String {
    let mut out = String::new();
    for town in 0..graph.node_count() {
        let _ = write!(out, "Town {town}:");
        for (neighbor, length) in graph.edges_with_lengths(town) {
            let _ = write!(out, " ({neighbor}, {length})");
        }
        out.push_str(";\n");
    }
    out
}
