use eframe::egui::{Align, Button, Layout, RichText, Ui};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRowViewModel {
    score: u32,
    round: u32,
    can_restart: bool,
}

impl ScoreRowViewModel {
    #[must_use]
    pub fn new(score: u32, round: u32, can_restart: bool) -> Self {
        Self {
            score,
            round,
            can_restart,
        }
    }
}

pub fn show(ui: &mut Ui, vm: &ScoreRowViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        let restart = ui.add_enabled(vm.can_restart, Button::new("Restart"));
        if restart.clicked() {
            action_queue.request(Action::Restart);
        }
        number_display(ui, "SCORE", vm.score);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            number_display(ui, "ROUND", vm.round);
        });
    });
}

fn number_display(ui: &mut Ui, title: &str, value: u32) {
    ui.vertical(|ui| {
        ui.label(RichText::new(title).small().strong());
        ui.label(RichText::new(value.to_string()).size(20.0).strong());
    });
}
