use std::ops::RangeInclusive;

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// A Bullseye game session.
///
/// Holds the hidden target, the accumulated score, and the round counter.
/// The target is re-rolled on every round transition; score and round persist
/// across rounds until [`Game::restart`].
///
/// # Example
///
/// ```
/// use bullseye_game::Game;
///
/// let mut game = Game::from_seed(42);
/// assert!(Game::TARGET_RANGE.contains(&game.target()));
/// assert_eq!(game.score(), 0);
/// assert_eq!(game.round(), 1);
///
/// let points = game.points(game.target());
/// assert_eq!(points, 100);
/// game.start_new_round(points);
/// assert_eq!(game.score(), 100);
/// assert_eq!(game.round(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: i32,
    score: u32,
    round: u32,
    rng: Pcg64Mcg,
}

impl Game {
    /// The range the hidden target is drawn from.
    pub const TARGET_RANGE: RangeInclusive<i32> = 1..=100;

    /// Creates a session with an OS-seeded generator.
    ///
    /// The initial target is drawn immediately; score starts at 0 and the
    /// round counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Pcg64Mcg::from_rng(&mut rand::rng()))
    }

    /// Creates a session with a deterministic generator.
    ///
    /// Sessions built from the same seed draw the same sequence of targets,
    /// which makes round scenarios reproducible in tests.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(Pcg64Mcg::seed_from_u64(seed))
    }

    fn with_rng(mut rng: Pcg64Mcg) -> Self {
        let target = rng.random_range(Self::TARGET_RANGE);
        Self {
            target,
            score: 0,
            round: 1,
            rng,
        }
    }

    /// Returns the hidden target for the current round.
    #[must_use]
    pub fn target(&self) -> i32 {
        self.target
    }

    /// Returns the accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the current round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the points awarded for a guess: `100 - |target - guess|`.
    ///
    /// Pure and total: the guess is not clamped or validated, so a guess far
    /// outside [`Game::TARGET_RANGE`] simply yields a larger (possibly
    /// negative) penalty.
    ///
    /// # Example
    ///
    /// ```
    /// use bullseye_game::Game;
    ///
    /// let game = Game::from_seed(0);
    /// let target = game.target();
    /// assert_eq!(game.points(target), 100);
    /// assert_eq!(game.points(target - 10), 90);
    /// assert_eq!(game.points(target + 10), 90);
    /// ```
    #[must_use]
    pub fn points(&self, guess: i32) -> i32 {
        100 - (self.target - guess).abs()
    }

    /// Completes the current round: banks the points, advances the round
    /// counter by one, and draws a fresh target.
    ///
    /// Negative points (possible only for out-of-range guesses) saturate the
    /// score at zero instead of underflowing, keeping the score a
    /// non-negative accumulator.
    pub fn start_new_round(&mut self, points: i32) {
        self.score = self.score.saturating_add_signed(points);
        self.round += 1;
        self.target = self.rng.random_range(Self::TARGET_RANGE);
    }

    /// Resets the session: score back to 0, round counter back to 1, and a
    /// fresh target.
    pub fn restart(&mut self) {
        self.score = 0;
        self.round = 1;
        self.target = self.rng.random_range(Self::TARGET_RANGE);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn game_with_target(target: i32) -> Game {
        Game {
            target,
            score: 0,
            round: 1,
            rng: Pcg64Mcg::seed_from_u64(0),
        }
    }

    #[test]
    fn test_new_session_starts_at_round_one() {
        let game = Game::new();
        assert!(Game::TARGET_RANGE.contains(&game.target()));
        assert_eq!(game.score(), 0);
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_same_seed_draws_same_targets() {
        let mut a = Game::from_seed(123);
        let mut b = Game::from_seed(123);
        assert_eq!(a.target(), b.target());
        for _ in 0..10 {
            a.start_new_round(0);
            b.start_new_round(0);
            assert_eq!(a.target(), b.target());
        }
    }

    #[test]
    fn test_points_scenarios() {
        let game = game_with_target(50);
        assert_eq!(game.points(50), 100);
        assert_eq!(game.points(40), 90);
        assert_eq!(game.points(60), 90);
        assert_eq!(game.points(1), 51);
        assert_eq!(game.points(100), 50);
    }

    #[test]
    fn test_points_does_not_clamp_out_of_range_guesses() {
        let game = game_with_target(50);
        assert_eq!(game.points(0), 50);
        assert_eq!(game.points(200), -50);
        assert_eq!(game.points(-50), 0);
    }

    #[test]
    fn test_start_new_round_banks_points_and_advances() {
        let mut game = game_with_target(50);
        game.start_new_round(90);
        game.start_new_round(80);
        game.start_new_round(70);
        assert_eq!(game.score(), 240);
        assert_eq!(game.round(), 4);
    }

    #[test]
    fn test_start_new_round_saturates_negative_points_at_zero() {
        let mut game = game_with_target(50);
        game.start_new_round(10);
        game.start_new_round(-50);
        assert_eq!(game.score(), 0);
        assert_eq!(game.round(), 3);
    }

    #[test]
    fn test_restart_resets_score_and_round() {
        let mut game = game_with_target(50);
        game.start_new_round(90);
        game.start_new_round(80);
        game.start_new_round(70);
        assert_eq!(game.score(), 240);
        assert_eq!(game.round(), 4);

        game.restart();
        assert_eq!(game.score(), 0);
        assert_eq!(game.round(), 1);
        assert!(Game::TARGET_RANGE.contains(&game.target()));
    }

    #[test]
    fn test_target_stays_in_range_across_rounds() {
        let mut game = Game::from_seed(7);
        for _ in 0..1000 {
            assert!(Game::TARGET_RANGE.contains(&game.target()));
            game.start_new_round(game.points(game.target()));
        }
    }

    proptest! {
        #[test]
        fn prop_points_matches_formula(target in 1..=100i32, guess in 1..=100i32) {
            let game = game_with_target(target);
            prop_assert_eq!(game.points(guess), 100 - (target - guess).abs());
        }

        #[test]
        fn prop_points_symmetric_in_error_sign(target in 1..=100i32, error in 0..=99i32) {
            let game = game_with_target(target);
            prop_assert_eq!(game.points(target - error), game.points(target + error));
        }

        #[test]
        fn prop_points_maximal_iff_exact(target in 1..=100i32, guess in 1..=100i32) {
            let game = game_with_target(target);
            prop_assert_eq!(game.points(guess) == 100, guess == target);
        }

        #[test]
        fn prop_start_new_round_never_decreases_score(
            seed in any::<u64>(),
            rounds in proptest::collection::vec(-100..=100i32, 1..20),
        ) {
            let mut game = Game::from_seed(seed);
            for points in rounds {
                let score_before = game.score();
                let round_before = game.round();
                game.start_new_round(points);
                prop_assert!(
                    points < 0 || game.score() >= score_before,
                    "score decreased on non-negative points"
                );
                prop_assert_eq!(game.round(), round_before + 1);
                prop_assert!(Game::TARGET_RANGE.contains(&game.target()));
            }
        }

        #[test]
        fn prop_restart_resets_regardless_of_prior_state(
            seed in any::<u64>(),
            rounds in proptest::collection::vec(0..=100i32, 0..20),
        ) {
            let mut game = Game::from_seed(seed);
            for points in rounds {
                game.start_new_round(points);
            }
            game.restart();
            prop_assert_eq!(game.score(), 0);
            prop_assert_eq!(game.round(), 1);
            prop_assert!(Game::TARGET_RANGE.contains(&game.target()));
        }
    }
}
