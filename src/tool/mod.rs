//! Drawing tools and their lifecycle.
//!
//! A tool is a pluggable interaction mode; exactly one is active at a time and
//! the [`ToolRegistry`] owns it. The host hands every collaborator a tool may
//! touch through a [`ToolContext`] built fresh for each dispatched event.
//!
//! Lifecycle: `pre_activate` (may refuse) → `activate` → event handlers →
//! `deactivate`. Anything acquired in `activate` (timers, input listeners)
//! must be released in `deactivate`; the registry calls it on every switch.

pub mod pointer;
pub mod registry;
pub mod text;

#[cfg(test)]
mod testing;

pub use pointer::PointerTool;
pub use registry::{RegistryError, ToolFactory, ToolRegistry};
pub use text::TextTool;

use crate::config::ToolConfig;
use crate::host::{HostCallbacks, ImageInfo, InputBindings, TextSurface};
use crate::input::{InputId, Key, MouseState, PointerEvent, ToolEvent};
use crate::timer::{TimerId, TimerService};
use std::fmt;

/// Registry key of a tool, e.g. `"text"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolId(pub &'static str);

impl ToolId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Everything a tool may read or mutate while handling one event.
pub struct ToolContext<'a> {
    pub image: ImageInfo,
    pub mouse: &'a mut MouseState,
    pub config: &'a ToolConfig,
    pub surface: &'a mut dyn TextSurface,
    pub inputs: &'a mut dyn InputBindings,
    pub timers: &'a mut dyn TimerService,
    pub host: &'a mut dyn HostCallbacks,
}

/// A pluggable interaction mode.
///
/// Handlers default to doing nothing so simple tools only implement what
/// they react to.
pub trait Tool {
    fn id(&self) -> ToolId;

    /// Capability check run before the tool replaces the active one.
    /// Returning `false` refuses activation and leaves the current tool alone.
    fn pre_activate(&mut self, _ctx: &mut ToolContext<'_>) -> bool {
        true
    }

    /// Called once the previous tool has been deactivated.
    fn activate(&mut self, _ctx: &mut ToolContext<'_>, _trigger: Option<&ToolEvent>) -> bool {
        true
    }

    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) -> bool {
        true
    }

    fn on_pointer_move(&mut self, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_down(&mut self, _ctx: &mut ToolContext<'_>, _event: &mut PointerEvent) {}

    fn on_pointer_up(&mut self, _ctx: &mut ToolContext<'_>, _event: &mut PointerEvent) {}

    fn on_click(&mut self, _ctx: &mut ToolContext<'_>, _event: &mut PointerEvent) {}

    /// Returns `true` when the key was handled.
    fn on_key_down(&mut self, _ctx: &mut ToolContext<'_>, _key: Key) -> bool {
        false
    }

    /// A repeating timer fired. Tools must ignore ids they do not own.
    fn on_timer(&mut self, _ctx: &mut ToolContext<'_>, _id: TimerId) {}

    /// A subscribed input changed value.
    fn on_input_changed(&mut self, _ctx: &mut ToolContext<'_>, _id: InputId) {}
}
