use eframe::egui::{InputState, Key};

use crate::{
    action::{Action, ActionRequestQueue},
    state::UiState,
};

/// Maps keyboard input to actions.
///
/// Space/Enter follows the interaction phase: it commits the guess while
/// selecting and starts the next round while the scoring panel is up. The
/// arrow keys nudge the slider by one unit; clamping happens in the handler.
pub fn handle_input(i: &InputState, ui_state: &UiState, action_queue: &mut ActionRequestQueue) {
    if (i.modifiers.ctrl || i.modifiers.command) && i.key_pressed(Key::R) {
        action_queue.request(Action::Restart);
    }

    if i.key_pressed(Key::Space) || i.key_pressed(Key::Enter) {
        let action = if ui_state.phase.is_selecting() {
            Action::CommitGuess
        } else {
            Action::StartNewRound
        };
        action_queue.request(action);
    }

    if ui_state.phase.is_selecting() {
        let left = i.key_pressed(Key::ArrowLeft);
        let right = i.key_pressed(Key::ArrowRight);
        if left != right {
            let delta = if right { 1.0 } else { -1.0 };
            action_queue.request(Action::SetSliderValue(ui_state.slider_value + delta));
        }
    }
}
