//! Input events, shared pointer state and bound tool-option inputs.
//!
//! Hosts translate their native events into the types here before handing
//! them to the active tool.

pub mod bindings;
pub mod events;
pub mod mouse;

pub use bindings::{BoundInputs, ChangeEvent, InputId, TEXT_TOOL_BINDINGS};
pub use events::{Key, MouseButton, PointerEvent, ToolEvent};
pub use mouse::MouseState;
