//! Session state snapshot

use serde::Serialize;
use std::collections::BTreeMap;

use crate::round::Round;
use crate::scoring::{Answers, RoundResult};

/// Stage of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Waiting for the player's answers
    #[default]
    Question,
    /// Answers scored, showing the result
    Review,
    /// Last round reviewed
    End,
}

/// Everything observers can see about a game
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub rounds: Vec<Round>,
    pub current_index: usize,
    pub answers: BTreeMap<usize, Answers>,
    pub results: BTreeMap<usize, RoundResult>,
    pub score_total: u32,
    pub phase: GamePhase,
}

impl GameState {
    #[inline]
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.get(self.current_index)
    }

    #[inline]
    pub fn current_result(&self) -> Option<&RoundResult> {
        self.results.get(&self.current_index)
    }

    #[inline]
    pub fn is_last_round(&self) -> bool {
        self.current_index + 1 >= self.rounds.len()
    }

    /// Best total reachable over all rounds of this game
    pub fn max_points(&self) -> u32 {
        self.rounds.len() as u32 * crate::scoring::MAX_POINTS
    }
}
