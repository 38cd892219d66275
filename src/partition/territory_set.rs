/// TerritorySet maintains a total assignment of towns to sets, each set kept in
/// ascending town order. Set 0 holds the unassigned towns.
#[derive(Debug, Clone)]
pub(crate) struct TerritorySet {
    sets: Vec<Vec<usize>>,  // sets[s] = towns currently in set s, sorted
    index: Vec<usize>,      // index[t] = s when t is in sets[s]
}

impl TerritorySet {
    /// Create a TerritorySet with `num_sets` sets and `num_elems` towns,
    /// initially placing every town in set 0.
    pub(crate) fn new(num_sets: usize, num_elems: usize) -> Self {
        assert!(num_sets > 0, "must have at least one set");
        let capacity = (num_elems / num_sets).isqrt().saturating_add(1);
        let mut sets = (0..num_sets)
            .map(|_| Vec::with_capacity(capacity))
            .collect::<Vec<_>>();
        sets[0] = (0..num_elems).collect();

        Self { sets, index: vec![0; num_elems] }
    }

    /// Number of sets (including set 0).
    #[inline] pub(crate) fn num_sets(&self) -> usize { self.sets.len() }

    /// Universe size (number of towns addressable by index).
    #[inline] pub(crate) fn num_elems(&self) -> usize { self.index.len() }

    /// Return the set that `elem` is currently in.
    #[inline]
    pub(crate) fn find(&self, elem: usize) -> usize {
        debug_assert!(elem < self.index.len(), "element out of range");
        self.index[elem]
    }

    /// Towns currently in `set`, in ascending order.
    #[inline]
    pub(crate) fn get(&self, set: usize) -> &[usize] {
        debug_assert!(set < self.sets.len(), "set out of range");
        &self.sets[set]
    }

    /// The set of every town, indexed by town.
    #[inline] pub(crate) fn assignments(&self) -> &[usize] { &self.index }

    /// Return every town to set 0.
    pub(crate) fn clear(&mut self) {
        self.sets.iter_mut().for_each(|v| v.clear());
        self.sets[0] = (0..self.num_elems()).collect();
        self.index.fill(0);
    }

    /// Rebuild from a complete slice of assignments.
    pub(crate) fn rebuild(&mut self, assignments: &[usize]) {
        assert!(assignments.len() == self.num_elems(), "assignments length mismatch");

        self.sets.iter_mut().for_each(|v| v.clear());
        for (elem, &set) in assignments.iter().enumerate() {
            assert!(set < self.num_sets(), "set out of range");
            self.index[elem] = set;
            self.sets[set].push(elem);
        }
    }

    /// Move `elem` to `set`, keeping both affected sets sorted.
    pub(crate) fn move_to(&mut self, elem: usize, set: usize) {
        debug_assert!(elem < self.index.len(), "element out of range");
        debug_assert!(set < self.sets.len(), "set out of range");

        let prev = self.index[elem];
        if prev == set { return }

        if let Ok(pos) = self.sets[prev].binary_search(&elem) {
            self.sets[prev].remove(pos);
        }

        let target = &mut self.sets[set];
        let pos = target.binary_search(&elem).unwrap_or_else(|pos| pos);
        target.insert(pos, elem);
        self.index[elem] = set;
    }
}

#[cfg(test)]
mod tests {
    use crate::partition::TerritorySet;

    #[test]
    fn new_fills_first_set() {
        let ts = TerritorySet::new(3, 5);
        assert_eq!(ts.num_sets(), 3);
        assert_eq!(ts.num_elems(), 5);

        assert_eq!(ts.get(0), &[0, 1, 2, 3, 4]);
        assert!(ts.get(1).is_empty());
        assert!(ts.get(2).is_empty());

        for elem in 0..5 {
            assert_eq!(ts.find(elem), 0);
        }
    }

    #[test]
    #[should_panic(expected = "must have at least one set")]
    fn new_panics_on_zero_sets() {
        TerritorySet::new(0, 4);
    }

    #[test]
    fn clear_resets_to_first_set() {
        let mut ts = TerritorySet::new(3, 6);
        ts.move_to(1, 1);
        ts.move_to(4, 2);
        ts.clear();

        assert_eq!(ts.get(0), &[0, 1, 2, 3, 4, 5]);
        assert!(ts.get(1).is_empty());
        assert!(ts.get(2).is_empty());
        assert!(ts.assignments().iter().all(|&s| s == 0));
    }

    #[test]
    fn rebuild_basic_assignment() {
        let mut ts = TerritorySet::new(3, 6);
        let assign = [0, 1, 2, 0, 2, 1];
        ts.rebuild(&assign);

        assert_eq!(ts.get(0), &[0, 3]);
        assert_eq!(ts.get(1), &[1, 5]);
        assert_eq!(ts.get(2), &[2, 4]);
        assert_eq!(ts.assignments(), &assign);
    }

    #[test]
    #[should_panic(expected = "assignments length mismatch")]
    fn rebuild_panics_on_len_mismatch() {
        let mut ts = TerritorySet::new(2, 4);
        ts.rebuild(&[0, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "set out of range")]
    fn rebuild_panics_on_set_oob() {
        let mut ts = TerritorySet::new(2, 3);
        ts.rebuild(&[0, 1, 2]);
    }

    #[test]
    fn move_to_same_set_is_a_no_op() {
        let mut ts = TerritorySet::new(2, 3);
        ts.move_to(2, 0);
        assert_eq!(ts.find(2), 0);
        assert_eq!(ts.get(0), &[0, 1, 2]);
        assert!(ts.get(1).is_empty());
    }

    #[test]
    fn moves_keep_sets_sorted() {
        let mut ts = TerritorySet::new(3, 8);
        for elem in [6, 2, 7, 0, 4] {
            ts.move_to(elem, 1);
        }
        ts.move_to(3, 2);
        ts.move_to(5, 2);
        ts.move_to(1, 2);

        assert_eq!(ts.get(0), &[] as &[usize]);
        assert_eq!(ts.get(1), &[0, 2, 4, 6, 7]);
        assert_eq!(ts.get(2), &[1, 3, 5]);
    }

    #[test]
    fn every_element_lives_in_exactly_one_set() {
        let mut ts = TerritorySet::new(3, 6);
        ts.move_to(0, 1);
        ts.move_to(1, 2);
        ts.move_to(2, 1);
        ts.move_to(2, 2);
        ts.move_to(5, 1);

        for elem in 0..6 {
            let set = ts.find(elem);
            assert!(ts.get(set).contains(&elem));
            let holders = (0..ts.num_sets()).filter(|&s| ts.get(s).contains(&elem)).count();
            assert_eq!(holders, 1);
        }
        assert_eq!(ts.get(2), &[1, 2]);
    }
}
