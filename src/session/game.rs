//! GameSession - round sequencing, score accumulation and observers
//!
//! The session is the single writer of a [`GameState`]. Every mutation goes
//! through `start`, `submit_answer`, `advance` or `reset`, and observers are
//! notified synchronously afterwards.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::config::GameConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::round::{RandomSource, Round, RoundGenerator, RoundOptions};
use crate::scoring::{score_round, Answers, RoundResult};

use super::{GamePhase, GameState};

/// Callback invoked with the state after each mutation
pub type Observer = Box<dyn Fn(&GameState) + Send + Sync>;

/// Handle returned by [`GameSession::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Quiz session over a shared dataset
pub struct GameSession<S = StdRng> {
    dataset: Arc<Dataset>,
    config: GameConfig,
    state: GameState,
    source: S,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl GameSession<StdRng> {
    /// Session drawing from an entropy-seeded generator
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_source(dataset, StdRng::from_entropy())
    }
}

impl<S: RandomSource> GameSession<S> {
    pub fn with_source(dataset: Arc<Dataset>, source: S) -> Self {
        Self {
            dataset,
            config: GameConfig::default(),
            state: GameState::default(),
            source,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Current state, borrowed
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[inline]
    pub fn current_round(&self) -> Option<&Round> {
        self.state.current_round()
    }

    #[inline]
    pub fn current_result(&self) -> Option<&RoundResult> {
        self.state.current_result()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state.phase == GamePhase::End
    }

    #[inline]
    pub fn max_points(&self) -> u32 {
        self.state.max_points()
    }

    /// Start a fresh game of `round_count` rounds with distinct targets.
    ///
    /// The count is capped at the number of distinct countries. Score, answers,
    /// results and phase are reset.
    pub fn start(&mut self, round_count: usize) -> Result<()> {
        let rounds = self.generate_rounds(round_count)?;
        tracing::debug!(rounds = rounds.len(), "starting game");

        self.state = GameState {
            rounds,
            ..GameState::default()
        };
        self.notify();
        Ok(())
    }

    /// Start a game with the configured round count
    pub fn start_default(&mut self) -> Result<()> {
        self.start(self.config.round_count)
    }

    /// Score `answers` for the current round and move to review.
    ///
    /// Ignored outside the question phase or when there is no current round;
    /// returns the result only when it was applied.
    pub fn submit_answer(&mut self, answers: Answers) -> Option<RoundResult> {
        if self.state.phase != GamePhase::Question {
            tracing::debug!(phase = ?self.state.phase, "submit ignored outside question phase");
            return None;
        }
        let round = self.state.current_round()?;

        let result = score_round(&round.flag, &answers);
        let index = self.state.current_index;
        tracing::debug!(
            round = index,
            target_code = %round.flag.code,
            points = result.points,
            "answer scored"
        );

        self.state.answers.insert(index, answers);
        self.state.results.insert(index, result);
        self.state.score_total += result.points;
        self.state.phase = GamePhase::Review;
        self.notify();
        Some(result)
    }

    /// Leave review: next question, or end after the last round.
    ///
    /// Returns `false` (and does nothing) outside the review phase.
    pub fn advance(&mut self) -> bool {
        if self.state.phase != GamePhase::Review {
            return false;
        }

        if self.state.is_last_round() {
            self.state.phase = GamePhase::End;
            tracing::debug!(score = self.state.score_total, "game finished");
        } else {
            self.state.current_index += 1;
            self.state.phase = GamePhase::Question;
        }
        self.notify();
        true
    }

    /// Discard the game unconditionally. Subscriptions are kept.
    pub fn reset(&mut self) {
        tracing::debug!("resetting game");
        self.state = GameState::default();
        self.notify();
    }

    /// Register an observer. It is called right away with the current state
    /// and again after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&GameState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        observer(&self.state);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; `false` if the id is unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }

    fn generate_rounds(&mut self, round_count: usize) -> Result<Vec<Round>> {
        let available = self.dataset.code_count();
        let target_count = round_count.min(available);
        if target_count < round_count {
            tracing::warn!(
                requested = round_count,
                available,
                "round count capped at dataset size"
            );
        }

        let generator = RoundGenerator::new(&self.dataset);
        let mut rounds: Vec<Round> = Vec::with_capacity(target_count);
        let mut used_codes: Vec<String> = Vec::with_capacity(target_count);

        while rounds.len() < target_count {
            let options = RoundOptions {
                countries: None,
                exclude_codes: &used_codes,
                num_choices: self.config.num_choices,
            };
            let round = generator.create_round(&options, &mut self.source)?;
            if used_codes.contains(&round.flag.code) {
                continue;
            }
            used_codes.push(round.flag.code.clone());
            rounds.push(round);
        }

        Ok(rounds)
    }
}
