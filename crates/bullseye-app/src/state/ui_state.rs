use std::ops::RangeInclusive;

/// The slider's continuous range, matching the target range of the game.
pub const SLIDER_RANGE: RangeInclusive<f32> = 1.0..=100.0;

const DEFAULT_SLIDER_VALUE: f32 = 50.0;

// UiState holds ephemeral UI-only state (interaction phase + slider). It is
// reset when the process exits, never saved.
#[derive(Debug)]
pub struct UiState {
    pub phase: Phase,
    pub slider_value: f32,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Selecting,
            slider_value: DEFAULT_SLIDER_VALUE,
        }
    }

    /// The slider position rounded to the nearest integer, ties away from
    /// zero. This single value feeds both the displayed guess and the score
    /// computation.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn rounded_guess(&self) -> i32 {
        self.slider_value.round() as i32
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// The two-state interaction machine gating which panel is visible.
///
/// `Selecting` shows the slider and the commit button; `Revealed` shows the
/// scoring panel with the guess and points captured at the moment the guess
/// was committed. The machine cycles between the two for the life of the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    Selecting,
    Revealed { guess: i32, points: i32 },
}
