use std::sync::Arc;

use crate::{
    error::Error,
    graph::Graph,
    partition::TerritorySet,
    types::CountryId,
};

/// An assignment of towns to countries over a shared road graph.
///
/// Internally set 0 of the territory set holds the unassigned towns and
/// country `c` lives in set `c + 1`.
#[derive(Clone, Debug)]
pub struct Partition {
    territories: TerritorySet,  // Towns of each country (including unassigned 0)
    graph: Arc<Graph>,          // Reference to the road graph
}

impl Partition {
    /// Construct a partition with `num_countries` countries and every town unassigned.
    pub fn new(graph: impl Into<Arc<Graph>>, num_countries: usize) -> Self {
        let graph: Arc<Graph> = graph.into();
        Self {
            territories: TerritorySet::new(num_countries + 1, graph.node_count()),
            graph,
        }
    }

    /// Construct a partition with one country per seed town, country `i` owning `seeds[i]`.
    pub fn with_seeds(graph: impl Into<Arc<Graph>>, seeds: &[usize]) -> Result<Self, Error> {
        let mut partition = Self::new(graph, seeds.len());
        partition.seed(seeds)?;
        Ok(partition)
    }

    /// Get the number of countries (excluding unassigned 0).
    #[inline] pub fn num_countries(&self) -> usize { self.territories.num_sets() - 1 }

    /// Get the number of towns in the underlying graph.
    #[inline] pub fn num_towns(&self) -> usize { self.graph.node_count() }

    /// Get a reference to the underlying graph.
    #[inline] pub fn graph(&self) -> &Graph { &self.graph }

    /// Get the country a given town belongs to, if any.
    #[inline]
    pub fn assignment(&self, town: usize) -> Option<CountryId> {
        assert!(town < self.num_towns(), "town {} out of range", town);
        match self.territories.find(town) {
            0 => None,
            set => Some(CountryId::from(set - 1)),
        }
    }

    /// Get a complete vector of assignments for each town.
    pub fn assignments(&self) -> Vec<Option<CountryId>> {
        (0..self.num_towns()).map(|town| self.assignment(town)).collect()
    }

    /// Towns owned by a country, in ascending order.
    #[inline]
    pub fn towns_of(&self, country: CountryId) -> &[usize] {
        assert!(country.index() < self.num_countries(), "country {} out of range", country);
        self.territories.get(country.index() + 1)
    }

    /// Towns not yet owned by any country, in ascending order.
    #[inline] pub fn unassigned(&self) -> &[usize] { self.territories.get(0) }

    /// Whether every town has a country.
    #[inline] pub fn is_complete(&self) -> bool { self.unassigned().is_empty() }

    /// Give each country its seed town: country `i` receives `seeds[i]`.
    ///
    /// All seeds are checked before any town is assigned, so a rejected call
    /// leaves the partition untouched.
    pub fn seed(&mut self, seeds: &[usize]) -> Result<(), Error> {
        if seeds.len() != self.num_countries() {
            return Err(Error::SeedCountMismatch { expected: self.num_countries(), actual: seeds.len() });
        }
        if self.unassigned().len() != self.num_towns() {
            return Err(Error::AlreadySeeded);
        }

        let mut seen = vec![false; self.num_towns()];
        for &town in seeds {
            if town >= self.num_towns() {
                return Err(Error::TownOutOfRange { town, num_towns: self.num_towns() });
            }
            if std::mem::replace(&mut seen[town], true) {
                return Err(Error::DuplicateSeed { town });
            }
        }

        for (country, &town) in seeds.iter().enumerate() {
            self.claim(town, CountryId::from(country));
        }

        Ok(())
    }

    /// Replace all assignments with the given labels, e.g. to resume an earlier run.
    pub fn set_assignments(&mut self, labels: &[Option<CountryId>]) -> Result<(), Error> {
        if labels.len() != self.num_towns() {
            return Err(Error::LabelCountMismatch { expected: self.num_towns(), actual: labels.len() });
        }
        if let Some(country) = labels.iter().flatten().find(|c| c.index() >= self.num_countries()) {
            return Err(Error::CountryOutOfRange { country: country.0, num_countries: self.num_countries() });
        }

        self.territories.rebuild(
            &labels.iter().map(|label| label.map_or(0, |c| c.index() + 1)).collect::<Vec<_>>()
        );

        Ok(())
    }

    /// Clear all assignments, setting every town to unassigned.
    pub fn clear_assignments(&mut self) {
        self.territories.clear();
    }

    /// Hand an unassigned town to a country.
    pub(super) fn claim(&mut self, town: usize, country: CountryId) {
        debug_assert!(self.assignment(town).is_none(), "town {town} is already assigned");
        self.territories.move_to(town, country.index() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Road;

    /// A path of five towns: 0 - 1 - 2 - 3 - 4
    fn path_graph() -> Graph {
        Graph::from_roads(5, &[
            Road::new(0, 1, 1),
            Road::new(1, 2, 1),
            Road::new(2, 3, 1),
            Road::new(3, 4, 1),
        ]).unwrap()
    }

    #[test]
    fn new_partition_is_unassigned() {
        let partition = Partition::new(path_graph(), 2);

        assert_eq!(partition.num_countries(), 2);
        assert_eq!(partition.num_towns(), 5);
        assert_eq!(partition.unassigned(), &[0, 1, 2, 3, 4]);
        assert!(partition.assignments().iter().all(Option::is_none));
        assert!(!partition.is_complete());
    }

    #[test]
    fn seeds_assign_countries_in_order() {
        let partition = Partition::with_seeds(path_graph(), &[3, 0]).unwrap();

        assert_eq!(partition.assignment(3), Some(CountryId(0)));
        assert_eq!(partition.assignment(0), Some(CountryId(1)));
        assert_eq!(partition.towns_of(CountryId(0)), &[3]);
        assert_eq!(partition.towns_of(CountryId(1)), &[0]);
        assert_eq!(partition.unassigned(), &[1, 2, 4]);
    }

    #[test]
    fn duplicate_seed_is_rejected_without_side_effects() {
        let mut partition = Partition::new(path_graph(), 3);
        let result = partition.seed(&[1, 4, 1]);

        assert_eq!(result, Err(Error::DuplicateSeed { town: 1 }));
        assert_eq!(partition.unassigned().len(), 5);
    }

    #[test]
    fn out_of_range_seed_is_rejected() {
        let result = Partition::with_seeds(path_graph(), &[0, 5]);
        assert_eq!(result.unwrap_err(), Error::TownOutOfRange { town: 5, num_towns: 5 });
    }

    #[test]
    fn seed_count_must_match_country_count() {
        let mut partition = Partition::new(path_graph(), 2);
        assert_eq!(partition.seed(&[0]), Err(Error::SeedCountMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn seeding_twice_is_rejected() {
        let mut partition = Partition::with_seeds(path_graph(), &[0, 4]).unwrap();
        assert_eq!(partition.seed(&[1, 2]), Err(Error::AlreadySeeded));
    }

    #[test]
    fn more_countries_than_towns_cannot_be_seeded() {
        let graph = Graph::from_roads(2, &[Road::new(0, 1, 1)]).unwrap();
        let result = Partition::with_seeds(graph, &[0, 1, 0]);
        assert_eq!(result.unwrap_err(), Error::DuplicateSeed { town: 0 });
    }

    #[test]
    fn set_assignments_round_trips() {
        let mut partition = Partition::new(path_graph(), 2);
        let labels = vec![Some(CountryId(1)), None, Some(CountryId(0)), Some(CountryId(1)), None];
        partition.set_assignments(&labels).unwrap();

        assert_eq!(partition.assignments(), labels);
        assert_eq!(partition.towns_of(CountryId(1)), &[0, 3]);
        assert_eq!(partition.unassigned(), &[1, 4]);
    }

    #[test]
    fn set_assignments_validates_input() {
        let mut partition = Partition::new(path_graph(), 2);

        assert_eq!(
            partition.set_assignments(&[None; 4]),
            Err(Error::LabelCountMismatch { expected: 5, actual: 4 }),
        );
        assert_eq!(
            partition.set_assignments(&[None, None, Some(CountryId(2)), None, None]),
            Err(Error::CountryOutOfRange { country: 2, num_countries: 2 }),
        );
    }

    #[test]
    fn clear_assignments_unassigns_everything() {
        let mut partition = Partition::with_seeds(path_graph(), &[0, 4]).unwrap();
        partition.clear_assignments();

        assert_eq!(partition.unassigned().len(), 5);
        assert!(partition.towns_of(CountryId(0)).is_empty());
    }

    #[test]
    #[should_panic(expected = "town 5 out of range")]
    fn assignment_panics_for_out_of_range_town() {
        let partition = Partition::new(path_graph(), 1);
        partition.assignment(5);
    }

    #[test]
    #[should_panic(expected = "country 2 out of range")]
    fn towns_of_panics_for_unknown_country() {
        let partition = Partition::new(path_graph(), 2);
        partition.towns_of(CountryId(2));
    }

    #[test]
    fn graph_is_shared_between_partitions() {
        let graph = Arc::new(path_graph());
        let first = Partition::with_seeds(Arc::clone(&graph), &[0]).unwrap();
        let second = Partition::with_seeds(Arc::clone(&graph), &[4]).unwrap();

        assert_eq!(Arc::strong_count(&graph), 3);
        assert_eq!(first.graph().edge_count(), second.graph().edge_count());
    }
}
