use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a single town within a `Graph`.
///
/// Towns are assigned contiguous indices starting from `0`, in the order the
/// town count was declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TownId(pub u32);

impl TownId {
    /// The raw index, for addressing per-town containers.
    #[inline] pub fn index(self) -> usize { self.0 as usize }
}

impl From<usize> for TownId {
    fn from(index: usize) -> Self { Self(index as u32) }
}

impl fmt::Display for TownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
