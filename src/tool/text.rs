//! Text placement tool.
//!
//! While active, the tool keeps a live preview of the text input's value at
//! the cursor on the preview surface. Pointer motion and edits of the bound
//! inputs only mark the preview dirty; a repeating timer (`tool.draw_delay_ms`)
//! redraws it, which bounds redraw cost no matter how fast the user types.
//!
//! A click commits the preview into the image layer and returns to the tool
//! that was active before; Escape returns without committing.

use super::{Tool, ToolContext, ToolId};
use crate::host::InputBindings;
use crate::input::{InputId, Key, PointerEvent, TEXT_TOOL_BINDINGS, ToolEvent};
use crate::timer::TimerId;
use log::{debug, info, trace};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listeners {
    Attach,
    Detach,
}

/// The text tool. Registered as `"text"`.
#[derive(Debug)]
pub struct TextTool {
    /// Redraw timer; `Some` exactly while the tool is active and uncommitted
    timer: Option<TimerId>,
    /// Tool to return to on commit/cancel, fixed at construction
    previous_tool: Option<ToolId>,
    needs_redraw: bool,
}

impl TextTool {
    pub const ID: ToolId = ToolId("text");

    pub fn new(previous_tool: Option<ToolId>) -> Self {
        Self {
            timer: None,
            previous_tool,
            needs_redraw: false,
        }
    }

    pub fn previous_tool(&self) -> Option<ToolId> {
        self.previous_tool
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Redraws the preview if it is dirty, or unconditionally when `force` is set.
    pub fn draw(&mut self, ctx: &mut ToolContext<'_>, force: bool) {
        if !self.needs_redraw && !force {
            return;
        }

        let (width, height) = (ctx.image.width as f64, ctx.image.height as f64);
        ctx.surface.clear_region(0.0, 0.0, width, height);

        let text = ctx.inputs.value(InputId::TextString).unwrap_or_default();
        let (x, y) = (ctx.mouse.x as f64, ctx.mouse.y as f64);

        if ctx.config.shape_type.fills() {
            ctx.surface.fill_text(text, x, y);
        }

        if ctx.config.shape_type.strokes() {
            ctx.surface.stroke_text(text, x, y);
        }

        self.needs_redraw = false;
    }

    fn setup(&self, inputs: &mut dyn InputBindings, action: Listeners) {
        for (id, event) in TEXT_TOOL_BINDINGS {
            if !inputs.has(id) {
                continue;
            }

            match action {
                Listeners::Attach => inputs.attach(id, event),
                Listeners::Detach => inputs.detach(id, event),
            }
        }
    }

    fn stop_timer(&mut self, ctx: &mut ToolContext<'_>) {
        if let Some(id) = self.timer.take() {
            ctx.timers.cancel(id);
        }
    }
}

impl Tool for TextTool {
    fn id(&self) -> ToolId {
        Self::ID
    }

    fn pre_activate(&mut self, ctx: &mut ToolContext<'_>) -> bool {
        if ctx.surface.supports_text() {
            return true;
        }

        let message = ctx.host.messages().error_text_unsupported.clone();
        ctx.host.show_error(&message);
        false
    }

    fn activate(&mut self, ctx: &mut ToolContext<'_>, _trigger: Option<&ToolEvent>) -> bool {
        // Text starts in the middle of the image.
        let (x, y) = ctx.image.center();
        ctx.mouse.move_to(x, y);

        ctx.host.set_text_options_visible(true);
        self.setup(&mut *ctx.inputs, Listeners::Attach);

        if self.timer.is_none() {
            let interval = Duration::from_millis(ctx.config.draw_delay_ms);
            self.timer = Some(ctx.timers.start_repeating(interval));
        }
        self.needs_redraw = true;

        debug!(
            "Text tool active at ({x}, {y}), previous tool: {:?}",
            self.previous_tool
        );
        true
    }

    fn deactivate(&mut self, ctx: &mut ToolContext<'_>) -> bool {
        self.stop_timer(ctx);
        self.needs_redraw = false;

        self.setup(&mut *ctx.inputs, Listeners::Detach);

        let (width, height) = (ctx.image.width as f64, ctx.image.height as f64);
        ctx.surface.clear_region(0.0, 0.0, width, height);

        ctx.host.set_text_options_visible(false);

        debug!("Text tool deactivated");
        true
    }

    fn on_pointer_move(&mut self, _ctx: &mut ToolContext<'_>) {
        self.needs_redraw = true;
    }

    fn on_click(&mut self, ctx: &mut ToolContext<'_>, event: &mut PointerEvent) {
        self.stop_timer(ctx);

        self.draw(ctx, true);
        ctx.host.commit_to_layer();
        info!("Committed text at ({}, {})", ctx.mouse.x, ctx.mouse.y);

        if let Some(previous) = self.previous_tool {
            ctx.host
                .activate_tool(previous, Some(ToolEvent::Pointer(*event)));
        }

        event.stop_propagation();
    }

    fn on_key_down(&mut self, ctx: &mut ToolContext<'_>, key: Key) -> bool {
        let Some(previous) = self.previous_tool else {
            return false;
        };
        if key != Key::Escape {
            return false;
        }

        ctx.mouse.button_down = false;
        ctx.host.activate_tool(previous, Some(ToolEvent::Key(key)));
        true
    }

    fn on_timer(&mut self, ctx: &mut ToolContext<'_>, id: TimerId) {
        if self.timer != Some(id) {
            trace!("Ignoring tick of stale timer {:?}", id);
            return;
        }
        self.draw(ctx, false);
    }

    fn on_input_changed(&mut self, _ctx: &mut ToolContext<'_>, id: InputId) {
        trace!("Input {} changed, preview marked dirty", id.name());
        self.needs_redraw = true;
    }
}
