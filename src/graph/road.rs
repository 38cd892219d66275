use serde::{Deserialize, Serialize};

/// One undirected road as it appears in the input: two endpoints and a length.
///
/// The length is signed so that malformed input can be reported by
/// `Graph::from_roads` instead of wrapping on the way in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub first: usize,
    pub second: usize,
    pub length: i64,
}

impl Road {
    #[inline]
    pub fn new(first: usize, second: usize, length: i64) -> Self {
        Self { first, second, length }
    }
}

impl From<(usize, usize, i64)> for Road {
    fn from((first, second, length): (usize, usize, i64)) -> Self {
        Self::new(first, second, length)
    }
}
