//! Round generation: target sampling and multiple-choice option sets

use ahash::AHashSet;
use serde::Serialize;

use crate::config::DEFAULT_NUM_CHOICES;
use crate::dataset::{distinct_continents, Continent, Country, Dataset};
use crate::error::{GeoQuizError, Result};
use crate::tranche::{Tranche, AREA_TRANCHES, POP_TRANCHES};

use super::shuffle::{shuffle, RandomSource};

/// Options offered to the player for each question of a round
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundChoices {
    /// Unique by code, contains the target exactly once
    pub countries: Vec<Country>,
    /// Unique, contains the target's capital exactly once
    pub capitals: Vec<String>,
    /// Every continent present in the candidate list
    pub continents: Vec<Continent>,
    pub pop_tranches: &'static [Tranche],
    pub area_tranches: &'static [Tranche],
}

/// One quiz question set built around a target country (the flag)
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    pub flag: Country,
    pub choices: RoundChoices,
}

/// Inputs for [`RoundGenerator::create_round`]
#[derive(Debug, Clone, Copy)]
pub struct RoundOptions<'a> {
    /// Candidate list; `None` means the whole dataset
    pub countries: Option<&'a [Country]>,
    /// Codes that may not be picked as the target
    pub exclude_codes: &'a [String],
    pub num_choices: usize,
}

impl Default for RoundOptions<'_> {
    fn default() -> Self {
        Self {
            countries: None,
            exclude_codes: &[],
            num_choices: DEFAULT_NUM_CHOICES,
        }
    }
}

/// Builds rounds from a dataset
pub struct RoundGenerator<'a> {
    dataset: &'a Dataset,
}

impl<'a> RoundGenerator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Pick a target and build its option sets.
    ///
    /// The target comes from the dataset minus `exclude_codes`, restricted to
    /// the candidate list. If the exclusions leave nothing, the whole candidate
    /// list is used instead. Distractors always come from the full candidate
    /// list. Fails only when the candidate list itself is empty.
    pub fn create_round<S: RandomSource + ?Sized>(
        &self,
        options: &RoundOptions<'_>,
        source: &mut S,
    ) -> Result<Round> {
        let candidates = options.countries.unwrap_or_else(|| self.dataset.countries());
        if candidates.is_empty() {
            return Err(GeoQuizError::EmptyCandidatePool);
        }

        let candidate_codes: AHashSet<&str> =
            candidates.iter().map(|c| c.code.as_str()).collect();
        let pool: Vec<&Country> = self
            .dataset
            .filter_excluding(options.exclude_codes)
            .into_iter()
            .filter(|c| candidate_codes.contains(c.code.as_str()))
            .collect();

        let base_pool: Vec<&Country> = if pool.is_empty() {
            tracing::warn!(
                excluded = options.exclude_codes.len(),
                "exclusions exhausted the pool, falling back to the full candidate list"
            );
            candidates.iter().collect()
        } else {
            pool
        };

        let flag = base_pool[source.next_index(base_pool.len())].clone();
        let countries = build_country_choices(&flag, candidates, options.num_choices, source);
        let capitals = build_capital_choices(&flag, candidates, options.num_choices, source);

        tracing::debug!(
            target_code = %flag.code,
            countries = countries.len(),
            capitals = capitals.len(),
            "created round"
        );

        Ok(Round {
            choices: RoundChoices {
                countries,
                capitals,
                continents: distinct_continents(candidates),
                pop_tranches: &POP_TRANCHES,
                area_tranches: &AREA_TRANCHES,
            },
            flag,
        })
    }
}

/// Take up to `needed` distinct items from `shuffled`, then top up from
/// `unshuffled` in its given order if the shuffled set fell short.
fn collect_distractors<T: Clone>(
    shuffled: &[T],
    unshuffled: &[T],
    needed: usize,
    same: impl Fn(&T, &T) -> bool,
) -> Vec<T> {
    let mut distractors: Vec<T> = Vec::with_capacity(needed);

    for item in shuffled {
        if distractors.len() >= needed {
            break;
        }
        if !distractors.iter().any(|d| same(d, item)) {
            distractors.push(item.clone());
        }
    }

    if distractors.len() < needed {
        for item in unshuffled {
            if distractors.len() >= needed {
                break;
            }
            if !distractors.iter().any(|d| same(d, item)) {
                distractors.push(item.clone());
            }
        }
    }

    distractors
}

fn build_country_choices<S: RandomSource + ?Sized>(
    flag: &Country,
    pool: &[Country],
    count: usize,
    source: &mut S,
) -> Vec<Country> {
    let others: Vec<&Country> = pool.iter().filter(|c| c.code != flag.code).collect();
    let shuffled = shuffle(&others, source);
    let needed = count.saturating_sub(1);

    let mut choices = collect_distractors(&shuffled, &others, needed, |a, b| a.code == b.code);
    choices.push(flag);

    shuffle(&choices, source).into_iter().cloned().collect()
}

fn build_capital_choices<S: RandomSource + ?Sized>(
    flag: &Country,
    pool: &[Country],
    count: usize,
    source: &mut S,
) -> Vec<String> {
    let other_capitals: Vec<&str> = pool
        .iter()
        .filter(|c| c.code != flag.code)
        .map(|c| c.capital.as_str())
        .filter(|capital| *capital != flag.capital)
        .collect();
    let shuffled = shuffle(&other_capitals, source);
    let needed = count.saturating_sub(1);

    let mut choices = collect_distractors(&shuffled, &other_capitals, needed, |a, b| a == b);
    choices.push(flag.capital.as_str());

    shuffle(&choices, source)
        .into_iter()
        .map(str::to_string)
        .collect()
}
