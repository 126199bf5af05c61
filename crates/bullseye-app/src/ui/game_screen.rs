use eframe::egui::{RichText, Ui};
use egui_extras::{Size, StripBuilder};

use super::{instructions, points_panel, score_row, slider_row};
use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        instructions::InstructionsViewModel, points_panel::PointsPanelViewModel,
        score_row::ScoreRowViewModel, slider_row::SliderRowViewModel,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameScreenViewModel {
    pub instructions_vm: InstructionsViewModel,
    pub body_vm: BodyViewModel,
    pub score_row_vm: ScoreRowViewModel,
}

/// Which center panel is shown: the guessing controls or the scoring panel.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyViewModel {
    Selecting(SliderRowViewModel),
    Revealed(PointsPanelViewModel),
}

impl GameScreenViewModel {
    #[must_use]
    pub fn new(
        instructions_vm: InstructionsViewModel,
        body_vm: BodyViewModel,
        score_row_vm: ScoreRowViewModel,
    ) -> Self {
        Self {
            instructions_vm,
            body_vm,
            score_row_vm,
        }
    }
}

pub fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::relative(0.3))
        .size(Size::remainder())
        .size(Size::exact(48.0))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                instructions::show(ui, &vm.instructions_vm);
            });
            strip.cell(|ui| match &vm.body_vm {
                BodyViewModel::Selecting(slider_vm) => {
                    ui.vertical_centered(|ui| {
                        if ui
                            .button(RichText::new("HIT ME").size(20.0).strong())
                            .clicked()
                        {
                            action_queue.request(Action::CommitGuess);
                        }
                    });
                    ui.add_space(12.0);
                    slider_row::show(ui, slider_vm, action_queue);
                }
                BodyViewModel::Revealed(points_vm) => {
                    points_panel::show(ui, points_vm, action_queue);
                }
            });
            strip.cell(|ui| {
                score_row::show(ui, &vm.score_row_vm, action_queue);
            });
        });
}
