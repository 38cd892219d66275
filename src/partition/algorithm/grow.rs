use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    partition::Partition,
    types::{CountryId, TownId},
};

/// One town handed to a country during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub country: CountryId,
    pub town: TownId,
    /// Length of the road the town was reached by.
    pub length: u64,
}

/// What a call to `Partition::grow` did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Growth {
    /// Turns taken, including turns in which a country could not grow.
    pub turns: usize,
    /// Claims in the order they were made.
    pub claims: Vec<Claim>,
}

impl Partition {
    /// Find the unassigned town a country would claim on its next turn.
    ///
    /// Every town the country owns is visited in ascending order, and each of
    /// its roads in adjacency order. The shortest road to an unassigned town
    /// wins; among equal lengths the first one found is kept.
    pub fn nearest_unclaimed(&self, country: CountryId) -> Option<Claim> {
        self.scan(country, 0)
    }

    /// Let a country claim its nearest unassigned neighbor, if it has one.
    pub fn take_turn(&mut self, country: CountryId) -> Option<Claim> {
        self.turn(country, 0)
    }

    /// Grow countries round-robin, one town per turn, until every town is assigned.
    ///
    /// Turns start at country 0 and cycle through all countries. A country
    /// with no unassigned neighbor passes its turn. If a full round passes
    /// without any country growing, the remaining towns cannot be reached and
    /// `Error::Unreachable` is returned; claims made before that point stay in
    /// the partition.
    pub fn grow(&mut self, verbose: u8) -> Result<Growth, Error> {
        let mut growth = Growth::default();
        if self.is_complete() { return Ok(growth) }

        let num_countries = self.num_countries();
        if num_countries == 0 {
            return Err(Error::NoCountries { unassigned: self.unassigned().len() });
        }

        let mut country = 0;
        let mut stalled = 0;
        while !self.is_complete() {
            if verbose > 1 {
                eprintln!("[grow] turn {} for country {}, state: {}", growth.turns, country, self.state_line());
            }

            match self.turn(CountryId::from(country), verbose) {
                Some(claim) => {
                    if verbose > 0 {
                        eprintln!("[grow] country {} claims town {} (length {})", claim.country, claim.town, claim.length);
                    }
                    growth.claims.push(claim);
                    stalled = 0;
                }
                None => {
                    if verbose > 0 {
                        eprintln!("[grow] country {} has no unassigned neighbors", country);
                    }
                    stalled += 1;
                }
            }
            growth.turns += 1;

            if stalled == num_countries {
                return Err(Error::Unreachable { unassigned: self.unassigned().len() });
            }
            country = (country + 1) % num_countries;
        }

        Ok(growth)
    }

    /// Scan for the nearest unassigned neighbor and claim it.
    fn turn(&mut self, country: CountryId, verbose: u8) -> Option<Claim> {
        let claim = self.scan(country, verbose)?;
        self.claim(claim.town.index(), country);
        Some(claim)
    }

    fn scan(&self, country: CountryId, verbose: u8) -> Option<Claim> {
        let mut nearest: Option<(usize, u64)> = None;

        for &town in self.towns_of(country) {
            if verbose > 1 { eprintln!("[grow] | country {} holds town {}", country, town); }

            for (neighbor, length) in self.graph().edges_with_lengths(town) {
                if self.assignment(neighbor).is_some() {
                    if verbose > 1 { eprintln!("[grow] | | town {} is taken", neighbor); }
                    continue;
                }

                // Strict comparison: the first shortest road found is kept.
                if nearest.is_none_or(|(_, best)| length < best) {
                    if verbose > 1 { eprintln!("[grow] | | town {} is free at {}, nearest so far", neighbor, length); }
                    nearest = Some((neighbor, length));
                } else if verbose > 1 {
                    eprintln!("[grow] | | town {} is free at {}, not nearer", neighbor, length);
                }
            }
        }

        nearest.map(|(town, length)| Claim { country, town: TownId::from(town), length })
    }

    /// One label per town, `-` for unassigned.
    fn state_line(&self) -> String {
        self.assignments().iter()
            .map(|label| label.map_or_else(|| "-".to_string(), |c| c.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
