use eframe::egui::{RichText, Ui};

#[derive(Debug, Clone, PartialEq)]
pub struct InstructionsViewModel {
    target: i32,
}

impl InstructionsViewModel {
    #[must_use]
    pub fn new(target: i32) -> Self {
        Self { target }
    }
}

pub fn show(ui: &mut Ui, vm: &InstructionsViewModel) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("PUT THE BULLSEYE AS CLOSE AS YOU CAN TO").strong());
        ui.label(RichText::new(vm.target.to_string()).size(40.0).strong());
    });
}
