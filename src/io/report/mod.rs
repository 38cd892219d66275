mod write;

use serde::{Deserialize, Serialize};

use crate::{
    partition::{Claim, Growth, Partition},
    types::{CountryId, TownId},
};

/// Output format for a `Report`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One `Country i: towns...` line per country.
    #[default]
    Text,
    /// The full report as pretty-printed JSON.
    Json,
}

/// The towns one country ended up with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryReport {
    pub country: CountryId,
    pub towns: Vec<TownId>,
}

/// Final labels of a partition together with the growth that produced them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Country of each town, `None` if unassigned.
    pub towns: Vec<Option<CountryId>>,
    pub countries: Vec<CountryReport>,
    pub turns: usize,
    pub claims: Vec<Claim>,
}

impl Report {
    /// Snapshot a partition after growth.
    pub fn new(partition: &Partition, growth: &Growth) -> Self {
        let countries = (0..partition.num_countries())
            .map(CountryId::from)
            .map(|country| CountryReport {
                country,
                towns: partition.towns_of(country).iter().copied().map(TownId::from).collect(),
            })
            .collect();

        Self {
            towns: partition.assignments(),
            countries,
            turns: growth.turns,
            claims: growth.claims.clone(),
        }
    }
}
