//! Round generation module

mod generator;
mod shuffle;


pub use generator::*;
pub use shuffle::*;
