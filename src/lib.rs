//! GeoQuiz Core - round generation and scoring engine for a flag quiz
//!
//! Given a flag, the player names the country and its capital, picks the
//! continent, and estimates population and area brackets. This crate builds
//! the rounds (target sampling, distractor option sets) and scores the
//! answers with partial credit. It is pure computation over an in-memory
//! country table; the optional `python` feature exposes it through PyO3.

pub mod config;
pub mod dataset;
pub mod error;
pub mod round;
pub mod scoring;
pub mod session;
pub mod tranche;

#[cfg(feature = "python")]
mod python;

pub use crate::config::GameConfig;
pub use crate::dataset::{Continent, Country, Dataset};
pub use crate::error::{GeoQuizError, Result};
pub use crate::round::{
    shuffle, RandomSource, Round, RoundChoices, RoundGenerator, RoundOptions, SequenceSource,
};
pub use crate::scoring::{score_round, Answers, Credit, QuestionKey, RoundResult};
pub use crate::session::{GamePhase, GameSession, GameState, SubscriptionId};
pub use crate::tranche::{Tranche, AREA_TRANCHES, POP_TRANCHES};
