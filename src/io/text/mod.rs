//! Whitespace-separated problem format.
//!
//! ```text
//! N M
//! first second length      (M rows)
//! C
//! seed                     (C values)
//! ```

mod read;
mod write;

use serde::{Deserialize, Serialize};

use crate::{error::Error, graph::{Graph, Road}, partition::Partition};

pub use read::{parse_problem, read_problem};
pub use write::roads_listing;

/// A parsed problem: the road network and one seed town per country.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub num_towns: usize,
    pub roads: Vec<Road>,
    pub seeds: Vec<usize>,
}

impl Problem {
    /// Build the road graph, rejecting out-of-range towns and negative lengths.
    pub fn graph(&self) -> Result<Graph, Error> {
        Graph::from_roads(self.num_towns, &self.roads)
    }

    /// Build the graph and seed one country per seed town.
    pub fn partition(&self) -> Result<Partition, Error> {
        Partition::with_seeds(self.graph()?, &self.seeds)
    }
}
