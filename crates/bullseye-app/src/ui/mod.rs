pub mod game_screen;
pub mod input;
pub mod instructions;
pub mod points_panel;
pub mod score_row;
pub mod slider_row;
