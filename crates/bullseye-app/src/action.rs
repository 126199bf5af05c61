use std::mem;

/// A user intent collected during a frame and applied by the action handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the slider to a new position.
    SetSliderValue(f32),
    /// Commit the current slider position as the guess for this round.
    CommitGuess,
    /// Bank the revealed points and begin the next round.
    StartNewRound,
    /// Reset score and round counter for a fresh session.
    Restart,
}

/// Collects actions emitted by widgets and input handling during a frame.
///
/// Widgets only push requests; all state mutation happens when
/// [`action_handler::handle_all`](crate::action_handler::handle_all) drains
/// the queue.
#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
