// Country Sorting - Core Library
// Record model, orderings and the seeded generator used by the demo binary

pub mod entities;
pub mod comparators;
pub mod generator;
pub mod config;
pub mod demo;
pub mod logging;

// Re-export commonly used types
pub use entities::{Continent, Country};
pub use comparators::{
    case_insensitive, chain, comparing, nulls_first, nulls_last, reversed, then,
    CountryOrdering, DynComparator, SortedIterExt,
    BY_NAME, BY_POPULATION_ASC, BY_AREA_DESC, BY_UN_ACCESSION_DATE_ASC,
    BY_NUMBER_OF_LANGUAGES_ASC, BY_CONTINENT_THEN_POPULATION_DESC, BY_CONTINENT_THEN_AREA_DESC,
};
pub use generator::{generate_countries, DataGenerator, GenerationSummary, FIXED_SEED};
pub use config::DemoConfig;
pub use demo::{build_steps, run, DemoStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
