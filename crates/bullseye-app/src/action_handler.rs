use log::{debug, info};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, Phase, SLIDER_RANGE, UiState},
};

pub fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::SetSliderValue(value) => {
            ui_state.slider_value = value.clamp(*SLIDER_RANGE.start(), *SLIDER_RANGE.end());
        }
        Action::CommitGuess => {
            // Ignored while the scoring panel is up; the commit button is not
            // shown in that phase, but keyboard input can still request it.
            if ui_state.phase.is_selecting() {
                let guess = ui_state.rounded_guess();
                let points = app_state.game.points(guess);
                debug!(
                    "guess {guess} committed against target {}, {points} points",
                    app_state.game.target()
                );
                ui_state.phase = Phase::Revealed { guess, points };
            }
        }
        Action::StartNewRound => {
            if let Phase::Revealed { points, .. } = ui_state.phase {
                app_state.game.start_new_round(points);
                info!(
                    "round {} started, score {}",
                    app_state.game.round(),
                    app_state.game.score()
                );
                ui_state.phase = Phase::Selecting;
            }
        }
        Action::Restart => {
            // Restart is only offered while selecting; a restart mid-reveal
            // would discard points the player has already seen.
            if ui_state.phase.is_selecting() {
                app_state.game.restart();
                info!("session restarted");
            }
        }
    }
}
