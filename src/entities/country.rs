// 🗺️ Country Entity - The record every demonstration sorts
//
// All fields are optional except the numeric ones. Ordering code must
// place missing values explicitly; see `comparators`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::continent::Continent;
use crate::comparators::case_insensitive;

// ============================================================================
// COUNTRY
// ============================================================================

/// A country record
///
/// Equality is structural over all fields. There is no `Ord` impl: the
/// natural ordering compares names only, which would disagree with `==`.
/// Use [`Country::compare_by_name`] or `comparators::BY_NAME` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: Option<String>,

    pub continent: Option<Continent>,

    /// Inhabitants
    pub population: u64,

    pub area_in_square_km: f64,

    /// Date of UN membership (None = unknown / not a member)
    pub accession_to_un: Option<NaiveDate>,

    /// National languages in declaration order (None = not recorded)
    pub national_languages: Option<Vec<String>>,
}

impl Country {
    pub fn new(
        name: Option<String>,
        continent: Option<Continent>,
        population: u64,
        area_in_square_km: f64,
        accession_to_un: Option<NaiveDate>,
        national_languages: Option<Vec<String>>,
    ) -> Self {
        Country {
            name,
            continent,
            population,
            area_in_square_km,
            accession_to_un,
            national_languages,
        }
    }

    /// Number of national languages, treating a missing list as empty
    pub fn language_count(&self) -> usize {
        self.national_languages.as_ref().map_or(0, Vec::len)
    }

    /// Natural ordering: name ignoring case, missing names first
    pub fn compare_by_name(&self, other: &Country) -> Ordering {
        match (&self.name, &other.name) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => case_insensitive(a, b),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country{{name='{}'", self.name.as_deref().unwrap_or("null"))?;

        match self.continent {
            Some(continent) => write!(f, ", continent={}", continent)?,
            None => write!(f, ", continent=N/A")?,
        }

        write!(
            f,
            ", population={}, areaInSquareKm={} km²",
            self.population, self.area_in_square_km
        )?;

        match self.accession_to_un {
            Some(date) => write!(f, ", accessionToUN={}", date.format("%Y-%m-%d"))?,
            None => write!(f, ", accessionToUN=null")?,
        }

        match &self.national_languages {
            Some(languages) => write!(f, ", nationalLanguages=[{}]", languages.join(", "))?,
            None => write!(f, ", nationalLanguages=N/A")?,
        }

        write!(f, "}}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
