//! Population and area brackets
//!
//! Two static, ordered tables of five tranches each. Together they cover
//! `[0, inf)` without gaps or overlaps, so every valid value resolves to
//! exactly one tranche.

mod tables;


pub use tables::*;

use serde::Serialize;

/// A labelled numeric bracket: `min <= value < max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tranche {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    /// Exclusive upper bound; `f64::INFINITY` for the last tranche
    pub max: f64,
}

impl Tranche {
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Index of the tranche containing `value`, or `None` for negative or NaN input
#[inline]
pub fn find_tranche_index(value: f64, table: &[Tranche]) -> Option<usize> {
    table.iter().position(|tranche| tranche.contains(value))
}

/// Index of the tranche with the given id
#[inline]
pub fn find_tranche_by_id(id: &str, table: &[Tranche]) -> Option<usize> {
    table.iter().position(|tranche| tranche.id == id)
}

/// Id of the population tranche containing `population`
pub fn population_tranche_id(population: u64) -> Option<&'static str> {
    find_tranche_index(population as f64, &POP_TRANCHES).map(|i| POP_TRANCHES[i].id)
}

/// Id of the area tranche containing `area_km2`
pub fn area_tranche_id(area_km2: f64) -> Option<&'static str> {
    find_tranche_index(area_km2, &AREA_TRANCHES).map(|i| AREA_TRANCHES[i].id)
}

/// Display label of a population tranche id
pub fn population_tranche_label(id: &str) -> Option<&'static str> {
    find_tranche_by_id(id, &POP_TRANCHES).map(|i| POP_TRANCHES[i].label)
}

/// Display label of an area tranche id
pub fn area_tranche_label(id: &str) -> Option<&'static str> {
    find_tranche_by_id(id, &AREA_TRANCHES).map(|i| AREA_TRANCHES[i].label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_half_open() {
        assert_eq!(find_tranche_index(0.0, &POP_TRANCHES), Some(0));
        assert_eq!(find_tranche_index(4_999_999.0, &POP_TRANCHES), Some(0));
        assert_eq!(find_tranche_index(5_000_000.0, &POP_TRANCHES), Some(1));
        assert_eq!(find_tranche_index(150_000_000.0, &POP_TRANCHES), Some(4));
        assert_eq!(find_tranche_index(99_999.9, &AREA_TRANCHES), Some(0));
        assert_eq!(find_tranche_index(100_000.0, &AREA_TRANCHES), Some(1));
        assert_eq!(find_tranche_index(3_000_000.0, &AREA_TRANCHES), Some(4));
    }

    #[test]
    fn test_negative_and_nan_not_found() {
        assert_eq!(find_tranche_index(-1.0, &POP_TRANCHES), None);
        assert_eq!(find_tranche_index(f64::NAN, &AREA_TRANCHES), None);
    }

    #[test]
    fn test_last_tranche_unbounded() {
        assert_eq!(find_tranche_index(1.0e15, &POP_TRANCHES), Some(4));
        assert_eq!(find_tranche_index(f64::MAX, &AREA_TRANCHES), Some(4));
    }

    #[test]
    fn test_id_helpers() {
        assert_eq!(population_tranche_id(68_170_000), Some("p4"));
        assert_eq!(area_tranche_id(551_695.0), Some("a3"));
        assert_eq!(area_tranche_id(-5.0), None);
    }

    #[test]
    fn test_label_helpers() {
        assert_eq!(population_tranche_label("p1"), Some("<5M"));
        assert_eq!(area_tranche_label("a5"), Some(">3M"));
        assert_eq!(population_tranche_label("a1"), None);
        assert_eq!(area_tranche_label(""), None);
    }
}
