//! Live-preview text placement for a raster image editor.
//!
//! The [`tool::TextTool`] plugs into any host implementing the capability
//! traits in [`host`]. [`editor::Editor`] is a headless host built on Cairo
//! surfaces, and [`runtime`] drives it from a calloop event loop so scripted
//! [`session`]s can be replayed end to end.

pub mod config;
pub mod draw;
pub mod editor;
pub mod host;
pub mod input;
pub mod runtime;
pub mod session;
pub mod timer;
pub mod tool;

pub use config::Config;
pub use editor::Editor;
