// 📋 Demonstration Driver
//
// Every step sorts its own copy of the same unsorted input, so the steps
// are independent of each other. Output goes to any `Write` sink.

use anyhow::{ensure, Result};
use std::cmp::Ordering;
use std::io::Write;

use crate::comparators::{
    case_insensitive, chain, comparing, nulls_first, reversed, DynComparator, SortedIterExt,
    BY_AREA_DESC, BY_CONTINENT_THEN_AREA_DESC, BY_CONTINENT_THEN_POPULATION_DESC, BY_NAME,
    BY_NUMBER_OF_LANGUAGES_ASC, BY_POPULATION_ASC, BY_UN_ACCESSION_DATE_ASC,
};
use crate::config::DemoConfig;
use crate::entities::Country;
use crate::generator::{DataGenerator, GenerationSummary};

/// Records whose languages are listed in the summary
const LANGUAGE_PREVIEW: usize = 5;

// ============================================================================
// STEPS
// ============================================================================

/// One sorted rendition of the input
#[derive(Debug, Clone)]
pub struct DemoStep {
    /// Short label, e.g. "6a"
    pub label: &'static str,
    pub title: &'static str,
    pub countries: Vec<Country>,
}

impl DemoStep {
    fn new(label: &'static str, title: &'static str, countries: Vec<Country>) -> Self {
        DemoStep {
            label,
            title,
            countries,
        }
    }
}

fn sorted_copy<F>(countries: &[Country], compare: F) -> Vec<Country>
where
    F: FnMut(&Country, &Country) -> Ordering,
{
    let mut copy = countries.to_vec();
    copy.sort_by(compare);
    copy
}

/// Apply every ordering to its own copy of `countries`
pub fn build_steps(countries: &[Country]) -> Vec<DemoStep> {
    let mut steps = Vec::new();

    steps.push(DemoStep::new("0", "Original (unsorted) list", countries.to_vec()));

    steps.push(DemoStep::new(
        "1",
        "Sorted by name (natural ordering)",
        sorted_copy(countries, Country::compare_by_name),
    ));

    steps.push(DemoStep::new(
        "2",
        "Sorted by continent (asc) then population (desc) (named comparator)",
        sorted_copy(countries, BY_CONTINENT_THEN_POPULATION_DESC),
    ));

    steps.push(DemoStep::new(
        "3",
        "Sorted by area (asc) (inline closure)",
        sorted_copy(countries, |a, b| a.area_in_square_km.total_cmp(&b.area_in_square_km)),
    ));

    steps.push(DemoStep::new(
        "4",
        "Sorted by UN accession date (oldest first, missing last) (closure)",
        sorted_copy(countries, |a, b| match (a.accession_to_un, b.accession_to_un) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.cmp(&y),
        }),
    ));

    let name_nulls_first = nulls_first(case_insensitive);
    let languages_then_name: Vec<DynComparator<Country>> = vec![
        Box::new(comparing(Country::language_count)),
        Box::new(move |a: &Country, b: &Country| {
            name_nulls_first(a.name.as_deref(), b.name.as_deref())
        }),
    ];
    steps.push(DemoStep::new(
        "5",
        "Sorted by number of languages (asc) then name (asc) (comparator chain)",
        sorted_copy(countries, chain(languages_then_name)),
    ));

    steps.push(DemoStep::new(
        "6a",
        "Sorted by population (asc) (constant BY_POPULATION_ASC)",
        sorted_copy(countries, BY_POPULATION_ASC),
    ));
    steps.push(DemoStep::new(
        "6b",
        "Sorted by area (desc) (constant BY_AREA_DESC)",
        sorted_copy(countries, BY_AREA_DESC),
    ));
    steps.push(DemoStep::new(
        "6c",
        "Sorted by UN accession date (asc, missing last) (constant BY_UN_ACCESSION_DATE_ASC)",
        sorted_copy(countries, BY_UN_ACCESSION_DATE_ASC),
    ));
    steps.push(DemoStep::new(
        "6d",
        "Sorted by number of languages (asc) (constant BY_NUMBER_OF_LANGUAGES_ASC)",
        sorted_copy(countries, BY_NUMBER_OF_LANGUAGES_ASC),
    ));

    steps.push(DemoStep::new(
        "7a",
        "Sorted by name (desc) (reversed natural ordering)",
        sorted_copy(countries, reversed(BY_NAME)),
    ));
    steps.push(DemoStep::new(
        "7b",
        "Sorted by population (desc) (reversed constant)",
        sorted_copy(countries, reversed(BY_POPULATION_ASC)),
    ));

    steps.push(DemoStep::new(
        "8a",
        "Iterator sorted by name (natural ordering)",
        countries.iter().cloned().sorted_by(BY_NAME).collect(),
    ));
    steps.push(DemoStep::new(
        "8b",
        "Iterator sorted by population (desc)",
        countries
            .iter()
            .cloned()
            .sorted_by(reversed(BY_POPULATION_ASC))
            .collect(),
    ));
    steps.push(DemoStep::new(
        "8c",
        "Iterator sorted by continent (asc) then area (desc)",
        countries
            .iter()
            .cloned()
            .sorted_by(BY_CONTINENT_THEN_AREA_DESC)
            .collect(),
    ));

    steps
}

// ============================================================================
// RENDERING
// ============================================================================

pub fn render_summary<W: Write>(
    out: &mut W,
    summary: &GenerationSummary,
    countries: &[Country],
) -> Result<()> {
    writeln!(out, "--- Generated countries (reproducible with seed: {}) ---", summary.seed)?;
    writeln!(out, "Generated {} countries.", summary.count)?;
    writeln!(out, "Countries without UN accession date: {}", summary.missing_accession)?;

    for country in countries.iter().take(LANGUAGE_PREVIEW) {
        let languages = country
            .national_languages
            .as_ref()
            .map_or_else(|| "N/A".to_string(), |l| format!("[{}]", l.join(", ")));
        writeln!(
            out,
            "Languages of {}: {}",
            country.name.as_deref().unwrap_or("null"),
            languages
        )?;
    }
    Ok(())
}

pub fn render_step<W: Write>(out: &mut W, step: &DemoStep) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {}. {} ---", step.label, step.title)?;
    for country in &step.countries {
        writeln!(out, "{}", country)?;
    }
    Ok(())
}

// ============================================================================
// RUN
// ============================================================================

/// Generate the data set and render every demonstration step
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    let mut generator = DataGenerator::with_seed(config.seed)?;
    let all_countries = generator.generate_countries(config.generated_count);
    ensure!(
        all_countries.len() >= config.demo_count,
        "generator returned {} records, {} needed",
        all_countries.len(),
        config.demo_count
    );

    writeln!(out, "Starting the country sorting demonstration...")?;
    writeln!(out)?;

    let summary = GenerationSummary::from_countries(generator.seed(), &all_countries);
    render_summary(out, &summary, &all_countries)?;

    let demo_countries = &all_countries[..config.demo_count];
    let steps = build_steps(demo_countries);
    tracing::debug!(steps = steps.len(), records = demo_countries.len(), "Built demonstration steps");

    for step in &steps {
        render_step(out, step)?;
    }

    writeln!(out)?;
    writeln!(out, "Sorting demonstration complete.")?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
