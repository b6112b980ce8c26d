//! Pun scoring, generation and ranking.

pub mod generator;
pub mod ranking;
pub mod similarity;

pub use similarity::score;
