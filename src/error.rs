use std::fmt;

/// Errors raised while building a graph or growing countries over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A road or seed refers to a town index outside `[0, num_towns)`.
    TownOutOfRange { town: usize, num_towns: usize },

    /// A road was given a negative length.
    NegativeLength { road: usize, length: i64 },

    /// The same town was listed as the seed of more than one country.
    DuplicateSeed { town: usize },

    /// The number of seeds differs from the number of countries.
    SeedCountMismatch { expected: usize, actual: usize },

    /// Seeds were applied to a partition that already has assigned towns.
    AlreadySeeded,

    /// A label vector does not have one entry per town.
    LabelCountMismatch { expected: usize, actual: usize },

    /// A label names a country the partition does not have.
    CountryOutOfRange { country: u32, num_countries: usize },

    /// Growth was requested with no countries while towns remain unassigned.
    NoCountries { unassigned: usize },

    /// Every country stalled for a full round with towns still unassigned.
    Unreachable { unassigned: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TownOutOfRange { town, num_towns } => write!(
                f,
                "town {town} is out of range (graph has {num_towns} towns)",
            ),
            Error::NegativeLength { road, length } => write!(
                f,
                "road {road} has negative length {length}",
            ),
            Error::DuplicateSeed { town } => write!(f, "town {town} seeds more than one country"),
            Error::SeedCountMismatch { expected, actual } => write!(
                f,
                "expected one seed per country ({expected} countries, got {actual} seeds)",
            ),
            Error::AlreadySeeded => write!(f, "partition already has assigned towns"),
            Error::LabelCountMismatch { expected, actual } => write!(
                f,
                "expected one label per town ({expected} towns, got {actual} labels)",
            ),
            Error::CountryOutOfRange { country, num_countries } => write!(
                f,
                "country {country} is out of range (partition has {num_countries} countries)",
            ),
            Error::NoCountries { unassigned } => write!(
                f,
                "no countries to grow but {unassigned} towns are unassigned",
            ),
            Error::Unreachable { unassigned } => write!(
                f,
                "no feasible assignment: graph not fully reachable from seeds ({unassigned} towns unassigned)",
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn unreachable_message_names_the_cause() {
        let message = Error::Unreachable { unassigned: 2 }.to_string();
        assert!(message.contains("not fully reachable"));
        assert!(message.contains("2 towns"));
    }

    #[test]
    fn out_of_range_message_includes_bounds() {
        let message = Error::TownOutOfRange { town: 9, num_towns: 4 }.to_string();
        assert_eq!(message, "town 9 is out of range (graph has 4 towns)");
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = Error::NoCountries { unassigned: 3 }.into();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::NoCountries { unassigned: 3 }));
    }
}
