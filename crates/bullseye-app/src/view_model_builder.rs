use crate::{
    state::{AppState, Phase, UiState},
    ui::{
        game_screen::{BodyViewModel, GameScreenViewModel},
        instructions::InstructionsViewModel,
        points_panel::PointsPanelViewModel,
        score_row::ScoreRowViewModel,
        slider_row::SliderRowViewModel,
    },
};

#[must_use]
pub fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    let instructions_vm = InstructionsViewModel::new(app_state.game.target());
    let body_vm = match ui_state.phase {
        Phase::Selecting => BodyViewModel::Selecting(SliderRowViewModel::new(ui_state.slider_value)),
        Phase::Revealed { guess, points } => {
            BodyViewModel::Revealed(PointsPanelViewModel::new(guess, points))
        }
    };
    let score_row_vm = ScoreRowViewModel::new(
        app_state.game.score(),
        app_state.game.round(),
        ui_state.phase.is_selecting(),
    );
    GameScreenViewModel::new(instructions_vm, body_vm, score_row_vm)
}

#[cfg(test)]
mod tests {
    use bullseye_game::Game;

    use super::*;

    #[test]
    fn selecting_phase_builds_slider_body_with_restart_enabled() {
        let app_state = AppState::new(Game::from_seed(1));
        let mut ui_state = UiState::new();
        ui_state.slider_value = 62.0;

        let vm = build_game_screen_view_model(&app_state, &ui_state);

        assert_eq!(
            vm.instructions_vm,
            InstructionsViewModel::new(app_state.game.target())
        );
        assert_eq!(
            vm.body_vm,
            BodyViewModel::Selecting(SliderRowViewModel::new(62.0))
        );
        assert_eq!(vm.score_row_vm, ScoreRowViewModel::new(0, 1, true));
    }

    #[test]
    fn revealed_phase_builds_points_body_with_restart_disabled() {
        let app_state = AppState::new(Game::from_seed(1));
        let mut ui_state = UiState::new();
        ui_state.phase = Phase::Revealed {
            guess: 62,
            points: 88,
        };

        let vm = build_game_screen_view_model(&app_state, &ui_state);

        assert_eq!(
            vm.body_vm,
            BodyViewModel::Revealed(PointsPanelViewModel::new(62, 88))
        );
        assert_eq!(vm.score_row_vm, ScoreRowViewModel::new(0, 1, false));
    }
}
