// 🎲 Data Generator - Reproducible synthetic countries
//
// Same seed + same count => field-identical records on every run.
// Field policy:
// - name:        two syllables + one ending, first letter capitalized
// - continent:   uniform over all seven
// - population:  uniform in [500_000, 1_400_000_000]
// - area:        uniform integer in [100_000, 17_000_000_000] / 100
// - accession:   missing with probability 0.1, else uniform day in window
// - languages:   1..=3 distinct entries from a shuffled fixed pool

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::entities::{Continent, Country};

/// Seed used unless a caller asks for another one
pub const FIXED_SEED: u64 = 12345;

pub const POSSIBLE_LANGUAGES: [&str; 17] = [
    "Englisch",
    "Spanisch",
    "Französisch",
    "Deutsch",
    "Chinesisch (Mandarin)",
    "Hindi",
    "Arabisch",
    "Portugiesisch",
    "Russisch",
    "Japanisch",
    "Bengalisch",
    "Lahnda",
    "Koreanisch",
    "Italienisch",
    "Türkisch",
    "Niederländisch",
    "Polnisch",
];

const SYLLABLES: [&str; 12] = ["Al", "ba", "ri", "on", "ta", "la", "ni", "ra", "do", "va", "lo", "sa"];
const ENDINGS: [&str; 5] = ["ien", "land", "stan", "tan", "mark"];

pub const MIN_POPULATION: u64 = 500_000;
pub const MAX_POPULATION: u64 = 1_400_000_000;

/// Area is drawn in hundredths of a square kilometre
const MIN_AREA_CENTI: u64 = 100_000;
const MAX_AREA_CENTI: u64 = 17_000_000_000;

const MISSING_ACCESSION_PROBABILITY: f64 = 0.1;
const MAX_LANGUAGES: usize = 3;

/// First day a country could join the UN
pub fn first_accession_day() -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(1945, 10, 24).context("Invalid first accession day")
}

/// Last day of the accession window (inclusive)
pub fn last_accession_day() -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2023, 12, 31).context("Invalid last accession day")
}

// ============================================================================
// GENERATOR
// ============================================================================

pub struct DataGenerator {
    seed: u64,
    rng: StdRng,
    first_day: NaiveDate,
    /// Days between first and last accession day
    window_days: i64,
}

impl DataGenerator {
    /// Generator seeded with [`FIXED_SEED`]
    pub fn new() -> Result<Self> {
        Self::with_seed(FIXED_SEED)
    }

    pub fn with_seed(seed: u64) -> Result<Self> {
        let first_day = first_accession_day()?;
        let window_days = (last_accession_day()? - first_day).num_days();

        tracing::debug!(seed, window_days, "Seeded data generator");

        Ok(DataGenerator {
            seed,
            rng: StdRng::seed_from_u64(seed),
            first_day,
            window_days,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `count` records, advancing the generator state
    pub fn generate_countries(&mut self, count: usize) -> Vec<Country> {
        let countries: Vec<Country> = (0..count).map(|_| self.next_country()).collect();
        tracing::info!(count = countries.len(), seed = self.seed, "Generated countries");
        countries
    }

    pub fn next_country(&mut self) -> Country {
        Country {
            name: Some(self.next_name()),
            continent: Some(self.next_continent()),
            population: self.rng.random_range(MIN_POPULATION..=MAX_POPULATION),
            area_in_square_km: self.next_area(),
            accession_to_un: self.next_accession(),
            national_languages: self.next_languages(),
        }
    }

    fn next_name(&mut self) -> String {
        let raw = format!(
            "{}{}{}",
            SYLLABLES[self.rng.random_range(0..SYLLABLES.len())],
            SYLLABLES[self.rng.random_range(0..SYLLABLES.len())],
            ENDINGS[self.rng.random_range(0..ENDINGS.len())],
        );
        capitalize(&raw)
    }

    fn next_continent(&mut self) -> Continent {
        Continent::ALL[self.rng.random_range(0..Continent::ALL.len())]
    }

    fn next_area(&mut self) -> f64 {
        self.rng.random_range(MIN_AREA_CENTI..=MAX_AREA_CENTI) as f64 / 100.0
    }

    fn next_accession(&mut self) -> Option<NaiveDate> {
        if self.rng.random::<f64>() < MISSING_ACCESSION_PROBABILITY {
            return None;
        }
        let offset = self.rng.random_range(0..=self.window_days);
        Some(self.first_day + Duration::days(offset))
    }

    fn next_languages(&mut self) -> Option<Vec<String>> {
        let wanted = self.rng.random_range(1..=MAX_LANGUAGES);

        let mut available = POSSIBLE_LANGUAGES.to_vec();
        available.shuffle(&mut self.rng);

        let languages: Vec<String> = available
            .into_iter()
            .take(wanted)
            .map(String::from)
            .collect();

        // Only reachable with a pool smaller than the draw
        if languages.is_empty() {
            None
        } else {
            Some(languages)
        }
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generate `count` records from a fresh generator seeded with [`FIXED_SEED`]
pub fn generate_countries(count: usize) -> Result<Vec<Country>> {
    Ok(DataGenerator::new()?.generate_countries(count))
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Self-report of a generated batch
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub seed: u64,
    pub count: usize,
    pub missing_accession: usize,
}

impl GenerationSummary {
    pub fn from_countries(seed: u64, countries: &[Country]) -> Self {
        GenerationSummary {
            seed,
            count: countries.len(),
            missing_accession: countries
                .iter()
                .filter(|c| c.accession_to_un.is_none())
                .count(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
