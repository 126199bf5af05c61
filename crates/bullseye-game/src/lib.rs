//! Game-state library for Bullseye.
//!
//! A session consists of repeated rounds: a hidden target in `1..=100` is
//! drawn, the player commits a guess, and points are awarded inversely
//! proportional to the error. [`Game`] tracks the target, the accumulated
//! score, and the round counter; it knows nothing about how guesses are
//! collected or displayed.

mod game;

pub use game::Game;
