use macroquad::prelude::{KeyCode, is_key_pressed};

/// Edge-triggered signals collected once per frame.
/// Each flag is set only on the frame the key goes down, never while held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub toggle_pause: bool,
    pub quit: bool,
}

impl FrameInput {
    /// Poll the window's keyboard state for this frame
    pub fn poll() -> Self {
        Self {
            toggle_pause: is_key_pressed(KeyCode::Space),
            quit: is_key_pressed(KeyCode::Escape),
        }
    }
}
