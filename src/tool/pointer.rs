//! Default tool: tracks the pointer and offers a shortcut into text mode.

use super::{TextTool, Tool, ToolContext, ToolId};
use crate::input::{Key, ToolEvent};

#[derive(Debug, Default)]
pub struct PointerTool;

impl PointerTool {
    pub const ID: ToolId = ToolId("pointer");

    pub fn new() -> Self {
        Self
    }
}

impl Tool for PointerTool {
    fn id(&self) -> ToolId {
        Self::ID
    }

    fn on_key_down(&mut self, ctx: &mut ToolContext<'_>, key: Key) -> bool {
        match key {
            Key::Char('t') | Key::Char('T') => {
                ctx.host.activate_tool(TextTool::ID, Some(ToolEvent::Key(key)));
                true
            }
            _ => false,
        }
    }
}
