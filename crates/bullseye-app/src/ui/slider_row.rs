use eframe::egui::{RichText, Slider, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    state::SLIDER_RANGE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SliderRowViewModel {
    value: f32,
}

impl SliderRowViewModel {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

pub fn show(ui: &mut Ui, vm: &SliderRowViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("1").strong());

        // The slider edits a local copy; the new position is applied through
        // the action queue like every other mutation.
        let mut value = vm.value;
        ui.spacing_mut().slider_width = (ui.available_width() - 40.0).max(80.0);
        let slider = ui.add(Slider::new(&mut value, SLIDER_RANGE).show_value(false));
        if slider.changed() {
            action_queue.request(Action::SetSliderValue(value));
        }

        ui.label(RichText::new("100").strong());
    });
}
