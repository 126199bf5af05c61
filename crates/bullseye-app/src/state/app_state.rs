use bullseye_game::Game;

// AppState holds the session state (the game itself). It lives for the whole
// process; there is no persistence across restarts.
#[derive(Debug)]
pub struct AppState {
    pub game: Game,
}

impl AppState {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self { game }
    }
}
