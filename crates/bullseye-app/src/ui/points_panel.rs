use eframe::egui::{Button, RichText, Ui};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone, PartialEq)]
pub struct PointsPanelViewModel {
    guess: i32,
    points: i32,
}

impl PointsPanelViewModel {
    #[must_use]
    pub fn new(guess: i32, points: i32) -> Self {
        Self { guess, points }
    }
}

pub fn show(ui: &mut Ui, vm: &PointsPanelViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.group(|ui| {
            ui.label(RichText::new("THE SLIDER'S VALUE IS").strong());
            ui.label(RichText::new(vm.guess.to_string()).size(40.0).strong());
            ui.label(format!("You scored {} points this round", vm.points));
            if ui
                .add(Button::new(RichText::new("Start New Round").size(18.0)))
                .clicked()
            {
                action_queue.request(Action::StartNewRound);
            }
        });
    });
}
