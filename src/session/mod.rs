//! Game session module

mod game;
mod state;


pub use game::*;
pub use state::*;
