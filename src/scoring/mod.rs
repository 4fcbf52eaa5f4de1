//! Answer matching and scoring module
//!
//! Free-text answers are compared after normalization against a small set of
//! accepted variants. Continent is all-or-nothing; population and area
//! brackets earn partial credit for a neighbouring bracket.

mod normalize;
mod scorer;


pub use normalize::*;
pub use scorer::*;
