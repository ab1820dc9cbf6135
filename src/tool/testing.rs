//! Recording fakes for exercising tools without a real editor.

use super::{ToolContext, ToolId};
use crate::config::{Messages, ShapeType, ToolConfig};
use crate::host::{HostCallbacks, ImageInfo, TextSurface};
use crate::input::{BoundInputs, InputId, MouseState, ToolEvent};
use crate::timer::ManualTimers;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear { width: f64, height: f64 },
    Fill { text: String, x: f64, y: f64 },
    Stroke { text: String, x: f64, y: f64 },
}

pub struct RecordingSurface {
    pub text_supported: bool,
    pub ops: Vec<SurfaceOp>,
}

impl TextSurface for RecordingSurface {
    fn supports_text(&self) -> bool {
        self.text_supported
    }

    fn clear_region(&mut self, _x: f64, _y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::Clear { width, height });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(SurfaceOp::Fill {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(SurfaceOp::Stroke {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub messages: Messages,
    pub commits: usize,
    pub activations: Vec<(ToolId, Option<ToolEvent>)>,
    pub statuses: Vec<String>,
    pub errors: Vec<String>,
    pub options_visible: bool,
}

impl HostCallbacks for RecordingHost {
    fn commit_to_layer(&mut self) {
        self.commits += 1;
    }

    fn activate_tool(&mut self, id: ToolId, trigger: Option<ToolEvent>) {
        self.activations.push((id, trigger));
    }

    fn show_status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn set_text_options_visible(&mut self, visible: bool) {
        self.options_visible = visible;
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

/// All collaborators of a tool, owned in one place.
pub struct Harness {
    pub image: ImageInfo,
    pub mouse: MouseState,
    pub config: ToolConfig,
    pub surface: RecordingSurface,
    pub inputs: BoundInputs,
    pub timers: ManualTimers,
    pub host: RecordingHost,
}

impl Harness {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            image: ImageInfo::new(width, height),
            mouse: MouseState::new(),
            config: ToolConfig::default(),
            surface: RecordingSurface {
                text_supported: true,
                ops: Vec::new(),
            },
            inputs: BoundInputs::new()
                .with_value(InputId::TextString, "")
                .with_value(InputId::TextFont, "sans-serif")
                .with_value(InputId::TextSize, "32")
                .with_value(InputId::LineWidth, "1"),
            timers: ManualTimers::new(),
            host: RecordingHost::default(),
        }
    }

    pub fn with_shape_type(mut self, shape_type: ShapeType) -> Self {
        self.config.shape_type = shape_type;
        self
    }

    pub fn ctx(&mut self) -> ToolContext<'_> {
        ToolContext {
            image: self.image,
            mouse: &mut self.mouse,
            config: &self.config,
            surface: &mut self.surface,
            inputs: &mut self.inputs,
            timers: &mut self.timers,
            host: &mut self.host,
        }
    }

    pub fn fills(&self) -> usize {
        self.surface
            .ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Fill { .. }))
            .count()
    }

    pub fn strokes(&self) -> usize {
        self.surface
            .ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke { .. }))
            .count()
    }
}
