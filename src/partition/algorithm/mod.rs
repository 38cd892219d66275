mod grow;

pub use grow::{Claim, Growth};
