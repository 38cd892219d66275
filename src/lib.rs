#![doc = "Borders public API"]
mod error;
mod graph;
mod io;
mod partition;
mod types;

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use graph::{Graph, Road};

#[doc(inline)]
pub use partition::{Claim, Growth, Partition};

#[doc(inline)]
pub use types::{CountryId, TownId};

#[doc(inline)]
pub use io::report::{CountryReport, Report, ReportFormat};

#[doc(inline)]
pub use io::text::{Problem, parse_problem, read_problem, roads_listing};
