//! Bullseye desktop application UI.
//!
//! # Design Notes
//! - Single screen: prompt and target on top, slider or scoring panel in the
//!   center, restart/score/round along the bottom.
//! - Unidirectional flow: widgets and keyboard input push
//!   [`Action`](crate::action::Action) requests into a queue; the action
//!   handler drains it and mutates state.

use bullseye_game::Game;
use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::ActionRequestQueue,
    action_handler,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct BullseyeApp {
    app_state: AppState,
    ui_state: UiState,
}

impl BullseyeApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            app_state: AppState::new(Game::new()),
            ui_state: UiState::new(),
        }
    }
}

impl App for BullseyeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| {
            ui::input::handle_input(i, &self.ui_state, &mut action_queue);
        });
        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
    }
}
