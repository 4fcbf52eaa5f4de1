//! Country dataset
//!
//! An immutable, ordered list of country records with a lookup by code. The
//! dataset is loaded once and shared read-only for the rest of the process.

mod country;

pub use country::*;

use ahash::{AHashMap, AHashSet};
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::error::{GeoQuizError, Result};
use crate::round::{shuffle, RandomSource};

/// Country table compiled into the crate
const BUNDLED_COUNTRIES: &str = include_str!("../../data/countries.json");

static BUNDLED: OnceCell<Arc<Dataset>> = OnceCell::new();

/// Ordered country list with an index by code
#[derive(Debug, Clone)]
pub struct Dataset {
    countries: Vec<Country>,
    by_code: AHashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from records assumed well-formed. If a code repeats,
    /// lookups resolve to its first occurrence.
    pub fn new(countries: Vec<Country>) -> Self {
        let mut by_code = AHashMap::with_capacity(countries.len());
        for (index, country) in countries.iter().enumerate() {
            by_code.entry(country.code.clone()).or_insert(index);
        }
        Self { countries, by_code }
    }

    /// Load a dataset from a JSON array of country records
    pub fn from_json(json: &str) -> Result<Self> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Ok(Self::new(countries))
    }

    /// Shared copy of the country table shipped with the crate
    pub fn bundled() -> Result<Arc<Dataset>> {
        BUNDLED
            .get_or_try_init(|| Dataset::from_json(BUNDLED_COUNTRIES).map(Arc::new))
            .cloned()
    }

    #[inline]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Number of distinct codes, which bounds how many rounds can have
    /// distinct targets
    #[inline]
    pub fn code_count(&self) -> usize {
        self.by_code.len()
    }

    pub fn get(&self, code: &str) -> Option<&Country> {
        self.by_code.get(code).map(|&index| &self.countries[index])
    }

    /// Lookup that treats a missing code as a data integrity violation
    pub fn require(&self, code: &str) -> Result<&Country> {
        self.get(code)
            .ok_or_else(|| GeoQuizError::CountryNotFound(code.to_string()))
    }

    /// Countries whose code is not in `exclude_codes`, in dataset order
    pub fn filter_excluding<S: AsRef<str>>(&self, exclude_codes: &[S]) -> Vec<&Country> {
        let exclude: AHashSet<&str> = exclude_codes.iter().map(|c| c.as_ref()).collect();
        self.countries
            .iter()
            .filter(|country| !exclude.contains(country.code.as_str()))
            .collect()
    }

    /// Distinct continents in order of first occurrence
    pub fn distinct_continents(&self) -> Vec<Continent> {
        distinct_continents(&self.countries)
    }

    /// Up to `count` countries drawn without replacement. Asking for the whole
    /// dataset (or more) returns every country in dataset order.
    pub fn random_subset<S: RandomSource + ?Sized>(
        &self,
        count: usize,
        source: &mut S,
    ) -> Vec<Country> {
        if count >= self.countries.len() {
            return self.countries.clone();
        }
        let mut picked = shuffle(&self.countries, source);
        picked.truncate(count);
        picked
    }
}

/// Distinct continents of a country list in order of first occurrence
pub fn distinct_continents(countries: &[Country]) -> Vec<Continent> {
    let mut seen = Vec::with_capacity(Continent::ALL.len());
    for country in countries {
        if !seen.contains(&country.continent) {
            seen.push(country.continent);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bundled_loads() {
        let dataset = Dataset::bundled().unwrap();
        assert!(dataset.len() >= 30);
        let france = dataset.get("FR").unwrap();
        assert_eq!(france.name, "France");
        assert_eq!(france.capital, "Paris");
        assert_eq!(france.continent, Continent::Europe);
    }

    #[test]
    fn test_bundled_is_shared() {
        let a = Dataset::bundled().unwrap();
        let b = Dataset::bundled().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_require_missing_code() {
        let dataset = Dataset::bundled().unwrap();
        let err = dataset.require("ZZ").unwrap_err();
        assert!(matches!(err, GeoQuizError::CountryNotFound(ref code) if code == "ZZ"));
    }

    #[test]
    fn test_filter_excluding() {
        let dataset = Dataset::bundled().unwrap();
        let remaining = dataset.filter_excluding(&["FR", "JP"]);
        assert_eq!(remaining.len(), dataset.len() - 2);
        assert!(remaining.iter().all(|c| c.code != "FR" && c.code != "JP"));
    }

    #[test]
    fn test_distinct_continents_first_occurrence() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(
            dataset.distinct_continents(),
            vec![
                Continent::Europe,
                Continent::Asia,
                Continent::NorthAmerica,
                Continent::SouthAmerica,
                Continent::Africa,
                Continent::Oceania,
            ]
        );
    }

    #[test]
    fn test_random_subset_unique() {
        let dataset = Dataset::bundled().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let subset = dataset.random_subset(5, &mut rng);
        assert_eq!(subset.len(), 5);
        let codes: AHashSet<&str> = subset.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes.len(), 5);

        let everything = dataset.random_subset(dataset.len() + 3, &mut rng);
        assert_eq!(everything, dataset.countries());
    }

    #[test]
    fn test_duplicate_code_resolves_to_first() {
        let json = r#"[
            {"code": "AA", "name": "First", "capital": "One", "continent": "Asia",
             "population": 1, "area_km2": 1, "flagSvgPath": "a.svg"},
            {"code": "AA", "name": "Second", "capital": "Two", "continent": "Asia",
             "population": 2, "area_km2": 2, "flagSvgPath": "b.svg"}
        ]"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.get("AA").unwrap().name, "First");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.code_count(), 1);
    }
}
