mod country_id;
mod town_id;

pub use country_id::CountryId;
pub use town_id::TownId;
