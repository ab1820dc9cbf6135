//! Headless editor host.
//!
//! [`Editor`] owns everything a tool collaborates with: the preview buffer,
//! the image layer, shared mouse state, the tool-option inputs, a timer
//! service and the tool registry. Native events enter through the public
//! methods, are dispatched to the active tool, and any requests the tool made
//! (commit, tool switch) are applied once the handler has returned.

use crate::config::{Config, Messages, TextConfig, ToolConfig};
use crate::draw::{CairoSurface, DrawError, Layer, TextStyle};
use crate::host::{HostCallbacks, ImageInfo, InputBindings};
use crate::input::{BoundInputs, InputId, Key, MouseButton, MouseState, PointerEvent, ToolEvent};
use crate::timer::{TimerId, TimerService};
use crate::tool::{RegistryError, Tool, ToolContext, ToolId, ToolRegistry};
use log::{debug, info, warn};
use std::collections::VecDeque;
use thiserror::Error;

/// Upper bound on requests applied after one event; guards against tools
/// that keep switching to each other.
const MAX_REQUESTS_PER_EVENT: usize = 32;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Invalid image size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error(transparent)]
    Draw(#[from] DrawError),
}

#[derive(Debug)]
enum HostRequest {
    Commit,
    ActivateTool {
        id: ToolId,
        trigger: Option<ToolEvent>,
    },
}

/// The part of the host that tools call back into.
struct Shell {
    messages: Messages,
    status: Option<String>,
    error: Option<String>,
    text_options_visible: bool,
    requests: VecDeque<HostRequest>,
}

impl HostCallbacks for Shell {
    fn commit_to_layer(&mut self) {
        self.requests.push_back(HostRequest::Commit);
    }

    fn activate_tool(&mut self, id: ToolId, trigger: Option<ToolEvent>) {
        self.requests.push_back(HostRequest::ActivateTool { id, trigger });
    }

    fn show_status(&mut self, message: &str) {
        info!("{message}");
        self.status = Some(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        warn!("{message}");
        self.error = Some(message.to_string());
    }

    fn set_text_options_visible(&mut self, visible: bool) {
        self.text_options_visible = visible;
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// Everything except the registry, so a tool borrowed from the registry can
/// receive a context built from the rest.
struct EditorState {
    image: ImageInfo,
    tool_config: ToolConfig,
    text_defaults: TextConfig,
    mouse: MouseState,
    buffer: CairoSurface,
    layer: Layer,
    inputs: BoundInputs,
    timers: Box<dyn TimerService>,
    shell: Shell,
}

impl EditorState {
    fn tool_context(&mut self) -> ToolContext<'_> {
        ToolContext {
            image: self.image,
            mouse: &mut self.mouse,
            config: &self.tool_config,
            surface: &mut self.buffer,
            inputs: &mut self.inputs,
            timers: self.timers.as_mut(),
            host: &mut self.shell,
        }
    }

    fn commit(&mut self) {
        match self.layer.composite(self.buffer.image()) {
            Ok(()) => {
                self.buffer.clear();
                let message = self.shell.messages.status_text_committed.clone();
                self.shell.show_status(&message);
            }
            Err(err) => self.shell.show_error(&format!("Commit failed: {err}")),
        }
    }

    /// Mirrors a style input into the preview surface's text style.
    fn apply_style_input(&mut self, id: InputId) {
        let Some(value) = self.inputs.value(id) else {
            return;
        };
        let style = self.buffer.style_mut();

        match id {
            InputId::TextString => {}
            InputId::TextFont => {
                if value.trim().is_empty() {
                    warn!("Empty font family, keeping '{}'", style.font.family);
                } else {
                    style.font.family = value.to_string();
                }
            }
            InputId::TextSize => {
                style.size = parse_positive(value, "text size", self.text_defaults.font_size);
            }
            InputId::LineWidth => {
                style.line_width =
                    parse_positive(value, "line width", self.text_defaults.line_width);
            }
        }
    }
}

fn parse_positive(value: &str, what: &str, fallback: f64) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed > 0.0 => parsed,
        _ => {
            warn!("Invalid {what} '{value}', using {fallback}");
            fallback
        }
    }
}

/// Headless editor hosting drawing tools.
pub struct Editor {
    tools: ToolRegistry,
    state: EditorState,
}

impl Editor {
    /// Creates an editor with a blank image of the given size and the
    /// built-in tools registered. No tool is active yet.
    pub fn new(
        width: i32,
        height: i32,
        config: &Config,
        timers: Box<dyn TimerService>,
    ) -> Result<Self, EditorError> {
        if width <= 0 || height <= 0 {
            return Err(EditorError::InvalidSize { width, height });
        }

        let text = &config.text;
        let inputs = BoundInputs::new()
            .with_value(InputId::TextString, text.default_string.clone())
            .with_value(InputId::TextFont, text.font_family.clone())
            .with_value(InputId::TextSize, text.font_size.to_string())
            .with_value(InputId::LineWidth, text.line_width.to_string());

        let state = EditorState {
            image: ImageInfo::new(width, height),
            tool_config: config.tool.clone(),
            text_defaults: text.clone(),
            mouse: MouseState::new(),
            buffer: CairoSurface::new(width, height, TextStyle::from_config(text))?,
            layer: Layer::new(width, height)?,
            inputs,
            timers,
            shell: Shell {
                messages: config.messages.clone(),
                status: None,
                error: None,
                text_options_visible: false,
                requests: VecDeque::new(),
            },
        };

        debug!("Editor created ({width}x{height})");
        Ok(Self {
            tools: ToolRegistry::with_builtin_tools(),
            state,
        })
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Registry access, e.g. to register additional tools.
    pub fn tools_mut(&mut self) -> &mut ToolRegistry {
        &mut self.tools
    }

    /// Switches to the tool registered under `name`.
    pub fn activate_tool(&mut self, name: &str) -> Result<(), RegistryError> {
        let id = self.tools.lookup(name)?;
        let result = self.tools.activate(id, None, &mut self.state.tool_context());
        self.process_requests();
        result
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.state.mouse.move_to(x, y);
        self.dispatch(|tool, ctx| tool.on_pointer_move(ctx));
    }

    /// Returns `true` when the active tool stopped propagation.
    pub fn pointer_down(&mut self, x: i32, y: i32, button: MouseButton) -> bool {
        self.state.mouse.move_to(x, y);
        self.state.mouse.button_down = true;
        let mut event = PointerEvent::new(x, y, button);
        self.dispatch(|tool, ctx| tool.on_pointer_down(ctx, &mut event));
        event.propagation_stopped()
    }

    /// Returns `true` when the active tool stopped propagation.
    pub fn pointer_up(&mut self, x: i32, y: i32, button: MouseButton) -> bool {
        self.state.mouse.move_to(x, y);
        self.state.mouse.button_down = false;
        let mut event = PointerEvent::new(x, y, button);
        self.dispatch(|tool, ctx| tool.on_pointer_up(ctx, &mut event));
        event.propagation_stopped()
    }

    /// Delivers a primary-button click. Returns `true` when the active tool
    /// stopped propagation.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        self.state.mouse.move_to(x, y);
        let mut event = PointerEvent::new(x, y, MouseButton::Left);
        self.dispatch(|tool, ctx| tool.on_click(ctx, &mut event));
        event.propagation_stopped()
    }

    /// Returns `true` when the active tool handled the key.
    pub fn key_down(&mut self, key: Key) -> bool {
        self.dispatch(|tool, ctx| tool.on_key_down(ctx, key))
            .unwrap_or(false)
    }

    /// Updates an input's value as if the user edited it, notifying the
    /// active tool when it listens to that input.
    pub fn set_input(&mut self, id: InputId, value: &str) {
        let listened = self.state.inputs.set(id, value).is_some();

        // Style follows the input even when no tool listens
        self.state.apply_style_input(id);

        if listened {
            self.dispatch(|tool, ctx| tool.on_input_changed(ctx, id));
        }
    }

    /// Routes a timer tick to the active tool.
    pub fn timer_tick(&mut self, id: TimerId) {
        self.dispatch(|tool, ctx| tool.on_timer(ctx, id));
    }

    /// Fires every running timer once, for hosts that drive timers from
    /// their own frame loop.
    pub fn tick_all_timers(&mut self) {
        for id in self.state.timers.active_timers() {
            self.timer_tick(id);
        }
    }

    /// Deactivates the active tool so its timers and listeners are released.
    pub fn shutdown(&mut self) {
        if let Some(id) = self.tools.deactivate_active(&mut self.state.tool_context()) {
            debug!("Deactivated '{id}' on shutdown");
        }
        self.process_requests();
    }

    pub fn image(&self) -> ImageInfo {
        self.state.image
    }

    pub fn mouse(&self) -> MouseState {
        self.state.mouse
    }

    pub fn active_tool(&self) -> Option<ToolId> {
        self.tools.active_id()
    }

    pub fn status(&self) -> Option<&str> {
        self.state.shell.status.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.shell.error.as_deref()
    }

    pub fn text_options_visible(&self) -> bool {
        self.state.shell.text_options_visible
    }

    pub fn input_value(&self, id: InputId) -> Option<&str> {
        self.state.inputs.value(id)
    }

    pub fn input_listener_count(&self) -> usize {
        self.state.inputs.listener_count()
    }

    pub fn active_timers(&self) -> Vec<TimerId> {
        self.state.timers.active_timers()
    }

    pub fn preview_mut(&mut self) -> &mut CairoSurface {
        &mut self.state.buffer
    }

    pub fn layer_mut(&mut self) -> &mut Layer {
        &mut self.state.layer
    }

    /// Consumes the editor, deactivating the active tool, and returns the
    /// image layer.
    pub fn into_layer(mut self) -> Layer {
        self.shutdown();
        self.state.layer
    }

    fn dispatch<R>(
        &mut self,
        handler: impl FnOnce(&mut dyn Tool, &mut ToolContext<'_>) -> R,
    ) -> Option<R> {
        let state = &mut self.state;
        let result = self
            .tools
            .active_mut()
            .map(|tool| handler(tool, &mut state.tool_context()));
        self.process_requests();
        result
    }

    fn process_requests(&mut self) {
        let mut applied = 0;
        while let Some(request) = self.state.shell.requests.pop_front() {
            if applied == MAX_REQUESTS_PER_EVENT {
                warn!("Dropping host requests after {applied} in one event");
                self.state.shell.requests.clear();
                break;
            }
            applied += 1;

            match request {
                HostRequest::Commit => self.state.commit(),
                HostRequest::ActivateTool { id, trigger } => {
                    let mut ctx = self.state.tool_context();
                    if let Err(err) = self.tools.activate(id, trigger.as_ref(), &mut ctx) {
                        warn!("Tool switch to '{id}' failed: {err}");
                    }
                }
            }
        }
    }
}
