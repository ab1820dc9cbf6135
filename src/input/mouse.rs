//! Shared pointer state.

/// Last known pointer position in image coordinates, plus the held-button flag.
///
/// The host updates it from pointer events before dispatching to the active
/// tool; tools may reposition the cursor (the text tool centers it) or clear
/// the held flag when they hand control back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    pub button_down: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
