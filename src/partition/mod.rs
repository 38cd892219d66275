mod algorithm;
mod partition;
mod territory_set;

pub(self) use territory_set::TerritorySet;
pub use algorithm::{Claim, Growth};
pub use partition::Partition;
