//! Round scoring with tiered partial credit

use serde::{Deserialize, Serialize};

use crate::dataset::{Continent, Country};
use crate::tranche::{find_tranche_by_id, find_tranche_index, Tranche, AREA_TRANCHES, POP_TRANCHES};

use super::normalize::{capital_variants, country_variants, normalize_text, Variants};

/// Points for a correct country name
pub const COUNTRY_POINTS: u32 = 2;
/// Points for a correct capital
pub const CAPITAL_POINTS: u32 = 2;
/// Points for the right continent
pub const CONTINENT_POINTS: u32 = 1;
/// Highest total a single round can award
pub const MAX_POINTS: u32 = COUNTRY_POINTS + CAPITAL_POINTS + CONTINENT_POINTS + 2 * 2;

/// The five questions asked each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    Country,
    Capital,
    Continent,
    #[serde(rename = "popTrancheId")]
    PopTranche,
    #[serde(rename = "areaTrancheId")]
    AreaTranche,
}

/// Player submissions; a missing field counts as wrong
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub continent: Option<Continent>,
    #[serde(default)]
    pub pop_tranche_id: Option<String>,
    #[serde(default)]
    pub area_tranche_id: Option<String>,
}

impl Answers {
    pub fn is_answered(&self, key: QuestionKey) -> bool {
        match key {
            QuestionKey::Country => self.country.is_some(),
            QuestionKey::Capital => self.capital.is_some(),
            QuestionKey::Continent => self.continent.is_some(),
            QuestionKey::PopTranche => self.pop_tranche_id.is_some(),
            QuestionKey::AreaTranche => self.area_tranche_id.is_some(),
        }
    }
}

/// Credit for a bracket guess: exact bracket, adjacent bracket, or neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u8")]
pub enum Credit {
    #[default]
    Miss,
    Adjacent,
    Exact,
}

impl Credit {
    #[inline]
    pub fn points(self) -> u32 {
        u8::from(self) as u32
    }
}

impl From<Credit> for u8 {
    fn from(credit: Credit) -> u8 {
        match credit {
            Credit::Miss => 0,
            Credit::Adjacent => 1,
            Credit::Exact => 2,
        }
    }
}

/// Per-question outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Correctness {
    pub country: bool,
    pub capital: bool,
    pub continent: bool,
    pub pop: Credit,
    pub area: Credit,
}

/// Scored round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RoundResult {
    pub correct: Correctness,
    pub points: u32,
}

fn matches_variant(answer: Option<&str>, variants: impl FnOnce() -> Variants) -> bool {
    match answer.and_then(normalize_text) {
        Some(normalized) => variants().contains(&normalized),
        None => false,
    }
}

/// Whether `answer` names `target` (code or name, ignoring case, accents and punctuation)
pub fn matches_country(answer: Option<&str>, target: &Country) -> bool {
    matches_variant(answer, || country_variants(target))
}

/// Whether `answer` names `capital` or one of its accepted short forms
pub fn matches_capital(answer: Option<&str>, capital: &str) -> bool {
    matches_variant(answer, || capital_variants(capital))
}

/// Credit for picking tranche `answer_id` when the true value is `value`
pub fn score_tranche(answer_id: Option<&str>, value: f64, table: &[Tranche]) -> Credit {
    let Some(correct_index) = find_tranche_index(value, table) else {
        return Credit::Miss;
    };
    let Some(answer_index) = answer_id.and_then(|id| find_tranche_by_id(id, table)) else {
        return Credit::Miss;
    };

    match answer_index.abs_diff(correct_index) {
        0 => Credit::Exact,
        1 => Credit::Adjacent,
        _ => Credit::Miss,
    }
}

/// Score the player's answers against the round's target country
pub fn score_round(target: &Country, answers: &Answers) -> RoundResult {
    let country = matches_country(answers.country.as_deref(), target);
    let capital = matches_capital(answers.capital.as_deref(), &target.capital);
    let continent = answers.continent == Some(target.continent);
    let pop = score_tranche(
        answers.pop_tranche_id.as_deref(),
        target.population as f64,
        &POP_TRANCHES,
    );
    let area = score_tranche(answers.area_tranche_id.as_deref(), target.area_km2, &AREA_TRANCHES);

    if !country {
        tracing::trace!(code = %target.code, answer = ?answers.country, "country answer not accepted");
    }

    let points = if country { COUNTRY_POINTS } else { 0 }
        + if capital { CAPITAL_POINTS } else { 0 }
        + if continent { CONTINENT_POINTS } else { 0 }
        + pop.points()
        + area.points();

    RoundResult {
        correct: Correctness {
            country,
            capital,
            continent,
            pop,
            area,
        },
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::tranche::{area_tranche_id, population_tranche_id};

    fn country(code: &str) -> Country {
        Dataset::bundled().unwrap().require(code).unwrap().clone()
    }

    fn perfect_answers(target: &Country, country: &str, capital: &str) -> Answers {
        Answers {
            country: Some(country.to_string()),
            capital: Some(capital.to_string()),
            continent: Some(target.continent),
            pop_tranche_id: population_tranche_id(target.population).map(str::to_string),
            area_tranche_id: area_tranche_id(target.area_km2).map(str::to_string),
        }
    }

    #[test]
    fn test_perfect_answers_score_nine() {
        let france = country("FR");
        let result = score_round(&france, &perfect_answers(&france, "FR", "Paris"));

        assert_eq!(result.points, 9);
        assert_eq!(result.points, MAX_POINTS);
        assert!(result.correct.country);
        assert!(result.correct.capital);
        assert!(result.correct.continent);
        assert_eq!(result.correct.pop, Credit::Exact);
        assert_eq!(result.correct.area, Credit::Exact);
    }

    #[test]
    fn test_free_text_ignores_case_and_accents() {
        let france = country("FR");
        for answer in ["france", "FRANCE ", "Fränce", "  fRaNcE"] {
            let result = score_round(&france, &perfect_answers(&france, answer, "paris "));
            assert!(result.correct.country, "{answer:?} should match France");
            assert!(result.correct.capital);
            assert_eq!(result.points, 9);
        }
    }

    #[test]
    fn test_adjacent_tranches_partial_credit() {
        let japan = country("JP");
        let answers = Answers {
            country: Some("US".to_string()),
            capital: Some("Kyoto".to_string()),
            continent: Some(Continent::Asia),
            pop_tranche_id: Some("p5".to_string()),
            area_tranche_id: Some("a3".to_string()),
        };
        let result = score_round(&japan, &answers);

        assert_eq!(result.points, 3);
        assert!(!result.correct.country);
        assert!(!result.correct.capital);
        assert!(result.correct.continent);
        assert_eq!(result.correct.pop, Credit::Adjacent);
        assert_eq!(result.correct.area, Credit::Adjacent);
    }

    #[test]
    fn test_far_tranches_score_zero() {
        let brazil = country("BR");
        let answers = Answers {
            country: Some("FR".to_string()),
            capital: Some("Brasília".to_string()),
            continent: Some(Continent::Africa),
            pop_tranche_id: Some("p1".to_string()),
            area_tranche_id: Some("a1".to_string()),
        };
        let result = score_round(&brazil, &answers);

        assert_eq!(result.points, 2);
        assert!(!result.correct.country);
        assert!(result.correct.capital);
        assert!(!result.correct.continent);
        assert_eq!(result.correct.pop, Credit::Miss);
        assert_eq!(result.correct.area, Credit::Miss);
    }

    #[test]
    fn test_tranche_adjacency_from_top() {
        // 1.4B people sits in p5
        let value = 1_410_000_000.0;
        assert_eq!(score_tranche(Some("p5"), value, &POP_TRANCHES), Credit::Exact);
        assert_eq!(score_tranche(Some("p4"), value, &POP_TRANCHES), Credit::Adjacent);
        assert_eq!(score_tranche(Some("p2"), value, &POP_TRANCHES), Credit::Miss);
        assert_eq!(score_tranche(Some("p1"), value, &POP_TRANCHES), Credit::Miss);
    }

    #[test]
    fn test_tranche_missing_or_unknown_id() {
        assert_eq!(score_tranche(None, 10.0, &POP_TRANCHES), Credit::Miss);
        assert_eq!(score_tranche(Some("a1"), 10.0, &POP_TRANCHES), Credit::Miss);
        assert_eq!(score_tranche(Some("p1"), -1.0, &POP_TRANCHES), Credit::Miss);
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let result = score_round(&country("NZ"), &Answers::default());
        assert_eq!(result, RoundResult::default());
    }

    #[test]
    fn test_blank_text_never_matches() {
        let target = country("FR");
        assert!(!matches_country(Some("   "), &target));
        assert!(!matches_capital(Some(""), &target.capital));
        assert!(!matches_country(None, &target));
    }

    #[test]
    fn test_capital_short_forms() {
        let us = country("US");
        assert!(matches_capital(Some("Washington"), &us.capital));
        assert!(matches_capital(Some("washington dc"), &us.capital));
        assert!(!matches_capital(Some("Seattle"), &us.capital));

        let bolivia = country("BO");
        assert!(matches_capital(Some("sucre"), &bolivia.capital));
    }

    #[test]
    fn test_country_name_punctuation_variants() {
        let ivory = country("CI");
        assert!(matches_country(Some("Cote d'Ivoire"), &ivory));
        assert!(matches_country(Some("COTE DIVOIRE"), &ivory));
        assert!(matches_country(Some("ci"), &ivory));
    }

    #[test]
    fn test_answers_deserialize_camel_case() {
        let answers: Answers = serde_json::from_str(
            r#"{"country": "Japan", "continent": "Asia", "popTrancheId": "p4"}"#,
        )
        .unwrap();
        assert_eq!(answers.country.as_deref(), Some("Japan"));
        assert_eq!(answers.continent, Some(Continent::Asia));
        assert_eq!(answers.pop_tranche_id.as_deref(), Some("p4"));
        assert!(!answers.is_answered(QuestionKey::Capital));
        assert!(answers.is_answered(QuestionKey::PopTranche));
    }

    #[test]
    fn test_result_serializes_credit_as_number() {
        let france = country("FR");
        let result = score_round(&france, &perfect_answers(&france, "France", "Paris"));
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["correct"]["pop"], 2);
        assert_eq!(json["points"], 9);
    }
}
