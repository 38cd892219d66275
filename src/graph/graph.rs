use crate::{error::Error, graph::Road};

/// A weighted, undirected road network in compressed sparse row format.
///
/// Every road is stored twice, once in each endpoint's adjacency list, with the
/// same length. Adjacency lists keep the order in which roads were inserted.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    size: usize,
    offsets: Vec<u32>,
    edges: Vec<u32>,
    lengths: Vec<u64>,
}

impl Graph {
    /// Build a graph of `num_towns` towns from a list of roads.
    ///
    /// For each road `(a, b, len)` the entry `a -> b` is appended to town `a`'s
    /// list before `b -> a` is appended to town `b`'s list. Duplicate roads and
    /// self-loops are kept as given.
    pub fn from_roads(num_towns: usize, roads: &[Road]) -> Result<Self, Error> {
        let mut edges = vec![vec![]; num_towns];
        let mut lengths = vec![vec![]; num_towns];

        for (i, road) in roads.iter().enumerate() {
            for town in [road.first, road.second] {
                if town >= num_towns {
                    return Err(Error::TownOutOfRange { town, num_towns });
                }
            }
            if road.length < 0 {
                return Err(Error::NegativeLength { road: i, length: road.length });
            }

            let length = road.length as u64;
            edges[road.first].push(road.second as u32);
            lengths[road.first].push(length);
            edges[road.second].push(road.first as u32);
            lengths[road.second].push(length);
        }

        Ok(Self::new(num_towns, &edges, &lengths))
    }

    /// Construct a graph from per-town adjacency lists and matching lengths.
    pub(crate) fn new(num_towns: usize, edges: &[Vec<u32>], lengths: &[Vec<u64>]) -> Self {
        assert!(edges.len() == num_towns, "edges.len() must equal num_towns");
        assert!(lengths.len() == num_towns, "lengths.len() must equal num_towns");
        edges.iter().zip(lengths.iter()).enumerate().for_each(|(i, (edges, lengths))| {
            assert!(edges.len() == lengths.len(), "edges[{i}].len() must equal lengths[{i}].len()");
        });

        Self {
            size: num_towns,
            offsets: std::iter::once(0u32).chain(
                edges.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: edges.iter().flatten().copied().collect(),
            lengths: lengths.iter().flatten().copied().collect(),
        }
    }

    /// Get the number of towns in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.size }

    /// Get the number of directed adjacency entries (twice the road count).
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Whether the graph has no towns.
    #[inline] pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Get the range of adjacency entries for a given town.
    #[inline]
    fn range(&self, town: usize) -> std::ops::Range<usize> {
        self.offsets[town] as usize .. self.offsets[town + 1] as usize
    }

    /// Get the degree (number of adjacency entries) of a given town.
    #[inline] pub fn degree(&self, town: usize) -> usize { self.range(town).len() }

    /// Get an iterator over the neighbors of a given town.
    #[inline]
    pub fn edges(&self, town: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(town).map(move |v| self.edges[v] as usize)
    }

    /// Get an iterator over the neighbors and road lengths of a given town.
    #[inline]
    pub fn edges_with_lengths(&self, town: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.range(town).map(move |v| (self.edges[v] as usize, self.lengths[v]))
    }
}
