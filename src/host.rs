//! Capabilities a host editor exposes to its drawing tools.
//!
//! Tools never reach into editor internals; every collaborator they use is
//! one of the traits below, handed over per call inside a
//! [`ToolContext`](crate::tool::ToolContext).

use crate::config::Messages;
use crate::input::{ChangeEvent, InputId, ToolEvent};
use crate::tool::ToolId;

/// Preview surface tools draw on before committing to the image.
pub trait TextSurface {
    /// Whether [`fill_text`](Self::fill_text) and
    /// [`stroke_text`](Self::stroke_text) do anything on this surface.
    fn supports_text(&self) -> bool;

    /// Makes the given rectangle fully transparent.
    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fills `text` with its baseline origin at `(x, y)` using the host's
    /// current text style.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Outlines `text` with its baseline origin at `(x, y)` using the host's
    /// current text style.
    fn stroke_text(&mut self, text: &str, x: f64, y: f64);
}

/// Access to the host's tool-option inputs and their change subscriptions.
pub trait InputBindings {
    /// Whether the host provides this input at all.
    fn has(&self, id: InputId) -> bool;

    fn value(&self, id: InputId) -> Option<&str>;

    /// Subscribes the active tool to `event` on input `id`.
    fn attach(&mut self, id: InputId, event: ChangeEvent);

    fn detach(&mut self, id: InputId, event: ChangeEvent);

    /// Number of subscriptions currently attached.
    fn listener_count(&self) -> usize;
}

/// Editor-level operations a tool can request.
pub trait HostCallbacks {
    /// Bakes the preview surface into the persistent image layer.
    fn commit_to_layer(&mut self);

    /// Switches the active tool, passing along the event that triggered it.
    fn activate_tool(&mut self, id: ToolId, trigger: Option<ToolEvent>);

    fn show_status(&mut self, message: &str);

    fn show_error(&mut self, message: &str);

    /// Shows or hides the text options panel.
    fn set_text_options_visible(&mut self, visible: bool);

    /// Localized user-facing strings.
    fn messages(&self) -> &Messages;
}

/// Width and height of the open image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: i32,
    pub height: i32,
}

impl ImageInfo {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Pixel at the geometric center, rounding half up.
    pub fn center(&self) -> (i32, i32) {
        (
            (self.width as f64 / 2.0).round() as i32,
            (self.height as f64 / 2.0).round() as i32,
        )
    }
}
