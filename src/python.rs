//! Python bindings over one process-wide game session

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use std::sync::Arc;

use crate::config::GameConfig;
use crate::dataset::{Continent, Dataset};
use crate::error::GeoQuizError;
use crate::scoring::{score_round, Answers};
use crate::session::GameSession;

/// Global session, replaced by every `init_dataset` call
static SESSION: OnceCell<Arc<Mutex<GameSession>>> = OnceCell::new();

fn session() -> PyResult<Arc<Mutex<GameSession>>> {
    SESSION
        .get()
        .cloned()
        .ok_or_else(|| PyRuntimeError::new_err("Dataset not initialized. Call init_dataset() first."))
}

fn build_answers(
    country: Option<String>,
    capital: Option<String>,
    continent: Option<String>,
    pop_tranche_id: Option<String>,
    area_tranche_id: Option<String>,
) -> Result<Answers, GeoQuizError> {
    let continent = continent
        .map(|label| label.parse::<Continent>())
        .transpose()?;
    Ok(Answers {
        country,
        capital,
        continent,
        pop_tranche_id,
        area_tranche_id,
    })
}

/// Load the country table (bundled table when `json` is omitted)
///
/// # Arguments
/// * `json` - JSON array of country records
/// * `config` - Optional JSON object with `round_count` / `num_choices`
#[pyfunction]
#[pyo3(signature = (json=None, config=None))]
fn init_dataset(json: Option<&str>, config: Option<&str>) -> PyResult<()> {
    let dataset = match json {
        Some(json) => Arc::new(Dataset::from_json(json)?),
        None => Dataset::bundled()?,
    };
    let config = match config {
        Some(config) => GameConfig::from_json(config)?,
        None => GameConfig::default(),
    };
    let fresh = GameSession::new(dataset).with_config(config);

    if let Some(existing) = SESSION.get() {
        *existing.lock() = fresh;
    } else {
        let _ = SESSION.set(Arc::new(Mutex::new(fresh)));
    }
    Ok(())
}

#[pyfunction]
fn is_initialized() -> bool {
    SESSION.get().is_some()
}

/// Start a new game; uses the configured round count when omitted
#[pyfunction]
#[pyo3(signature = (round_count=None))]
fn start_game(round_count: Option<usize>) -> PyResult<()> {
    let session = session()?;
    let mut guard = session.lock();
    match round_count {
        Some(count) => guard.start(count)?,
        None => guard.start_default()?,
    }
    Ok(())
}

/// Submit answers for the current round
///
/// # Returns
/// Points awarded, or `None` when the submission was ignored
#[pyfunction]
#[pyo3(signature = (country=None, capital=None, continent=None, pop_tranche_id=None, area_tranche_id=None))]
fn submit_answer(
    country: Option<String>,
    capital: Option<String>,
    continent: Option<String>,
    pop_tranche_id: Option<String>,
    area_tranche_id: Option<String>,
) -> PyResult<Option<u32>> {
    let answers = build_answers(country, capital, continent, pop_tranche_id, area_tranche_id)?;
    let session = session()?;
    let result = session.lock().submit_answer(answers);
    Ok(result.map(|r| r.points))
}

#[pyfunction]
fn next_round() -> PyResult<bool> {
    let session = session()?;
    let moved = session.lock().advance();
    Ok(moved)
}

#[pyfunction]
fn reset_game() -> PyResult<()> {
    session()?.lock().reset();
    Ok(())
}

/// Current game state serialized as JSON
#[pyfunction]
fn game_state_json() -> PyResult<String> {
    let session = session()?;
    let guard = session.lock();
    serde_json::to_string(guard.state()).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Score answers against an arbitrary country without touching the session
#[pyfunction]
#[pyo3(signature = (code, country=None, capital=None, continent=None, pop_tranche_id=None, area_tranche_id=None))]
fn score_answer(
    code: &str,
    country: Option<String>,
    capital: Option<String>,
    continent: Option<String>,
    pop_tranche_id: Option<String>,
    area_tranche_id: Option<String>,
) -> PyResult<u32> {
    let answers = build_answers(country, capital, continent, pop_tranche_id, area_tranche_id)?;
    let session = session()?;
    let guard = session.lock();
    let target = guard.dataset().require(code)?;
    Ok(score_round(target, &answers).points)
}

/// Python module definition
#[pymodule]
fn geoquiz_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_dataset, m)?)?;
    m.add_function(wrap_pyfunction!(is_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(start_game, m)?)?;
    m.add_function(wrap_pyfunction!(submit_answer, m)?)?;
    m.add_function(wrap_pyfunction!(next_round, m)?)?;
    m.add_function(wrap_pyfunction!(reset_game, m)?)?;
    m.add_function(wrap_pyfunction!(game_state_json, m)?)?;
    m.add_function(wrap_pyfunction!(score_answer, m)?)?;
    Ok(())
}
