mod app_state;
mod ui_state;

pub use app_state::AppState;
pub use ui_state::{Phase, SLIDER_RANGE, UiState};
