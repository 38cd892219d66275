use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a country. Country `i` is the one seeded by the `i`-th seed town.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(pub u32);

impl CountryId {
    #[inline] pub fn index(self) -> usize { self.0 as usize }
}

impl From<usize> for CountryId {
    fn from(index: usize) -> Self { Self(index as u32) }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
