// ↕️ Comparators - Orderings over Country records
//
// One abstraction: a function from two records to `Ordering`.
// Named orderings are plain `fn` constants; closures, combinators and
// chains are accepted wherever `Fn(&T, &T) -> Ordering` is.
//
// Missing values are never left to chance. Each ordering states where
// `None` goes, and the placement differs per field:
// - name:        missing first
// - continent:   missing last
// - accession:   missing last
// - languages:   missing counts as zero

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::entities::{Continent, Country};

/// Signature of the named orderings below
pub type CountryOrdering = fn(&Country, &Country) -> Ordering;

/// A boxed comparator, used where orderings of different types are mixed
pub type DynComparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

// ============================================================================
// COMBINATORS
// ============================================================================

/// Compare two strings ignoring case
pub fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Order by an extracted key
pub fn comparing<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// Lift `cmp` to optional values, placing `None` before everything else
pub fn nulls_first<K, F>(cmp: F) -> impl Fn(Option<&K>, Option<&K>) -> Ordering
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    move |a: Option<&K>, b: Option<&K>| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

/// Lift `cmp` to optional values, placing `None` after everything else
pub fn nulls_last<K, F>(cmp: F) -> impl Fn(Option<&K>, Option<&K>) -> Ordering
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    move |a: Option<&K>, b: Option<&K>| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

/// Invert an ordering
pub fn reversed<T, F>(cmp: F) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| cmp(b, a)
}

/// Use `second` to break ties left by `first`
pub fn then<T, F, G>(first: F, second: G) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
    G: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| first(a, b).then_with(|| second(a, b))
}

/// Lexicographic composition: the first non-equal result wins
///
/// An empty chain treats every pair as equal.
pub fn chain<'a, T>(comparators: Vec<DynComparator<'a, T>>) -> impl Fn(&T, &T) -> Ordering + 'a
where
    T: ?Sized + 'a,
{
    move |a: &T, b: &T| {
        comparators
            .iter()
            .map(|cmp| cmp(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

// ============================================================================
// NAMED ORDERINGS
// ============================================================================

/// Natural ordering (name, ignoring case, missing names first)
pub fn by_name(a: &Country, b: &Country) -> Ordering {
    a.compare_by_name(b)
}

pub fn by_population_asc(a: &Country, b: &Country) -> Ordering {
    a.population.cmp(&b.population)
}

/// Largest area first
pub fn by_area_desc(a: &Country, b: &Country) -> Ordering {
    b.area_in_square_km.total_cmp(&a.area_in_square_km)
}

/// Oldest members first, missing dates last
pub fn by_un_accession_date_asc(a: &Country, b: &Country) -> Ordering {
    nulls_last(NaiveDate::cmp)(a.accession_to_un.as_ref(), b.accession_to_un.as_ref())
}

pub fn by_number_of_languages_asc(a: &Country, b: &Country) -> Ordering {
    a.language_count().cmp(&b.language_count())
}

/// Continent display name ascending (missing last), then population descending
pub fn by_continent_then_population_desc(a: &Country, b: &Country) -> Ordering {
    compare_continents(a.continent, b.continent).then_with(|| b.population.cmp(&a.population))
}

/// Continent display name ascending (missing last), then area descending
pub fn by_continent_then_area_desc(a: &Country, b: &Country) -> Ordering {
    compare_continents(a.continent, b.continent).then_with(|| by_area_desc(a, b))
}

fn compare_continents(a: Option<Continent>, b: Option<Continent>) -> Ordering {
    nulls_last(|x: &Continent, y: &Continent| case_insensitive(x.display_name(), y.display_name()))(
        a.as_ref(),
        b.as_ref(),
    )
}

pub const BY_NAME: CountryOrdering = by_name;
pub const BY_POPULATION_ASC: CountryOrdering = by_population_asc;
pub const BY_AREA_DESC: CountryOrdering = by_area_desc;
pub const BY_UN_ACCESSION_DATE_ASC: CountryOrdering = by_un_accession_date_asc;
pub const BY_NUMBER_OF_LANGUAGES_ASC: CountryOrdering = by_number_of_languages_asc;
pub const BY_CONTINENT_THEN_POPULATION_DESC: CountryOrdering = by_continent_then_population_desc;
pub const BY_CONTINENT_THEN_AREA_DESC: CountryOrdering = by_continent_then_area_desc;

// ============================================================================
// LAZY SEQUENCES
// ============================================================================

/// Sorting as an iterator adapter
///
/// The adapter has to see every element before yielding the first one, so
/// it buffers the whole sequence and sorts it stably.
pub trait SortedIterExt: Iterator + Sized {
    fn sorted_by<F>(self, compare: F) -> std::vec::IntoIter<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut buffer: Vec<Self::Item> = self.collect();
        buffer.sort_by(compare);
        buffer.into_iter()
    }
}

impl<I: Iterator> SortedIterExt for I {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str) -> Country {
        Country::new(Some(name.to_string()), None, 0, 0.0, None, None)
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.name.as_deref().unwrap_or("-")).collect()
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(case_insensitive("Albania", "zimbabwe"), Ordering::Less);
        assert_eq!(case_insensitive("ALBANIA", "albania"), Ordering::Equal);
        assert_eq!(case_insensitive("b", "A"), Ordering::Greater);
    }

    #[test]
    fn test_by_name_sorts_case_insensitive_with_missing_first() {
        let mut list = vec![
            country("zimbabwe"),
            country("Albania"),
            Country::new(None, None, 0, 0.0, None, None),
            country("mali"),
        ];
        list.sort_by(BY_NAME);

        assert!(list[0].name.is_none());
        assert_eq!(names(&list[1..]), vec!["Albania", "mali", "zimbabwe"]);
    }

    #[test]
    fn test_accession_date_missing_last() {
        let mut missing = country("Missing");
        missing.accession_to_un = None;
        let mut late = country("Late");
        late.accession_to_un = date(1990, 6, 15);
        let mut early = country("Early");
        early.accession_to_un = date(1960, 1, 1);

        let mut list = vec![missing, late, early];
        list.sort_by(BY_UN_ACCESSION_DATE_ASC);

        let dates: Vec<Option<NaiveDate>> = list.iter().map(|c| c.accession_to_un).collect();
        assert_eq!(dates, vec![date(1960, 1, 1), date(1990, 6, 15), None]);
    }

    #[test]
    fn test_area_descending() {
        let mut small = country("Small");
        small.area_in_square_km = 1_000.0;
        let mut large = country("Large");
        large.area_in_square_km = 170_000_000_000.0;

        let mut list = vec![small, large];
        list.sort_by(BY_AREA_DESC);
        assert_eq!(names(&list), vec!["Large", "Small"]);
    }

    #[test]
    fn test_language_count_missing_is_zero() {
        let mut one = country("One");
        one.national_languages = Some(vec!["Hindi".to_string()]);
        let mut empty = country("Empty");
        empty.national_languages = Some(Vec::new());
        let none = country("None");

        assert_eq!(by_number_of_languages_asc(&none, &empty), Ordering::Equal);
        assert_eq!(by_number_of_languages_asc(&none, &one), Ordering::Less);
    }

    #[test]
    fn test_continent_then_population_desc() {
        let make = |name: &str, continent: Option<Continent>, population: u64| {
            let mut c = country(name);
            c.continent = continent;
            c.population = population;
            c
        };

        let mut list = vec![
            make("Nowhere", None, 999),
            make("Asia100", Some(Continent::Asien), 100),
            make("Europe", Some(Continent::Europa), 50),
            make("Asia200", Some(Continent::Asien), 200),
            make("Africa", Some(Continent::Afrika), 10),
        ];
        list.sort_by(BY_CONTINENT_THEN_POPULATION_DESC);

        assert_eq!(
            names(&list),
            vec!["Africa", "Asia200", "Asia100", "Europe", "Nowhere"]
        );
    }

    #[test]
    fn test_continent_uses_display_name() {
        // Declaration order puts Antarktis last; by display name it is second
        let make = |continent: Continent| {
            let mut c = country(continent.display_name());
            c.continent = Some(continent);
            c
        };

        let mut list: Vec<Country> = Continent::ALL.iter().copied().map(make).collect();
        list.sort_by(BY_CONTINENT_THEN_AREA_DESC);

        assert_eq!(
            names(&list),
            vec!["Afrika", "Antarktis", "Asien", "Europa", "Nordamerika", "Ozeanien", "Südamerika"]
        );
    }

    #[test]
    fn test_chain_language_count_then_name() {
        let with_languages = |name: &str, count: usize| {
            let mut c = country(name);
            c.national_languages = Some(vec!["Deutsch".to_string(); count]);
            c
        };

        let mut list = vec![
            with_languages("zeta", 2),
            with_languages("Alpha", 2),
            with_languages("Omega", 1),
        ];

        let name_nulls_first = nulls_first(case_insensitive);
        let comparators: Vec<DynComparator<Country>> = vec![
            Box::new(comparing(Country::language_count)),
            Box::new(move |a: &Country, b: &Country| {
                name_nulls_first(a.name.as_deref(), b.name.as_deref())
            }),
        ];
        let ordering = chain(comparators);
        list.sort_by(&ordering);

        assert_eq!(names(&list), vec!["Omega", "Alpha", "zeta"]);
    }

    #[test]
    fn test_empty_chain_is_equal() {
        let ordering = chain(Vec::<DynComparator<Country>>::new());
        assert_eq!(ordering(&country("a"), &country("b")), Ordering::Equal);
    }

    #[test]
    fn test_then_breaks_ties() {
        let ordering = then(BY_NUMBER_OF_LANGUAGES_ASC, BY_NAME);
        assert_eq!(ordering(&country("b"), &country("A")), Ordering::Greater);
    }

    #[test]
    fn test_nulls_placement() {
        let first = nulls_first(i32::cmp);
        let last = nulls_last(i32::cmp);

        assert_eq!(first(None, Some(&1)), Ordering::Less);
        assert_eq!(last(None, Some(&1)), Ordering::Greater);
        assert_eq!(first(None, None), Ordering::Equal);
        assert_eq!(last(None, None), Ordering::Equal);
        assert_eq!(last(Some(&2), Some(&1)), Ordering::Greater);
    }

    #[test]
    fn test_reversed_population_is_reverse_of_ascending() {
        let list: Vec<Country> = [30u64, 10, 50, 20, 40]
            .iter()
            .map(|&p| {
                let mut c = country(&p.to_string());
                c.population = p;
                c
            })
            .collect();

        let mut ascending = list.clone();
        ascending.sort_by(BY_POPULATION_ASC);
        let mut descending = list.clone();
        descending.sort_by(reversed(BY_POPULATION_ASC));

        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_reversed_with_ties_is_descending() {
        let list: Vec<Country> = [5u64, 1, 5, 3, 1]
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut c = country(&i.to_string());
                c.population = p;
                c
            })
            .collect();

        let mut descending = list;
        descending.sort_by(reversed(BY_POPULATION_ASC));

        assert!(descending
            .windows(2)
            .all(|pair| pair[0].population >= pair[1].population));
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut list = vec![country("c"), country("A"), country("b")];
        list.sort_by(BY_NAME);
        let once = list.clone();
        list.sort_by(BY_NAME);

        assert_eq!(list, once);
    }

    #[test]
    fn test_sorted_by_iterator_adapter() {
        let list = vec![country("c"), country("A"), country("b")];
        let sorted: Vec<Country> = list.iter().cloned().sorted_by(BY_NAME).collect();

        assert_eq!(names(&sorted), vec!["A", "b", "c"]);
        // Source untouched
        assert_eq!(names(&list), vec!["c", "A", "b"]);
    }
}
