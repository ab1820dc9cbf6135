//! Scripted editing sessions.
//!
//! A session script is a TOML file listing user actions to replay against an
//! [`Editor`], one step per tick of the playback timer:
//!
//! ```toml
//! step_delay_ms = 50
//!
//! [[step]]
//! action = "activate"
//! tool = "text"
//!
//! [[step]]
//! action = "input"
//! input = "text_string"
//! value = "Hi"
//!
//! [[step]]
//! action = "wait"
//! ms = 200
//!
//! [[step]]
//! action = "click"
//! x = 100
//! y = 50
//! ```

use crate::editor::Editor;
use crate::input::{InputId, Key, MouseButton};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Step {index}: unknown key '{key}'")]
    UnknownKey { index: usize, key: String },
}

/// One user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Activate { tool: String },
    Move { x: i32, y: i32 },
    Click { x: i32, y: i32 },
    Key(Key),
    Input { input: InputId, value: String },
    Wait(Duration),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum RawStep {
    Activate { tool: String },
    Move { x: i32, y: i32 },
    Click { x: i32, y: i32 },
    Key { key: String },
    Input { input: InputId, value: String },
    Wait { ms: u64 },
}

#[derive(Debug, Deserialize)]
struct RawScript {
    #[serde(default = "default_step_delay_ms")]
    step_delay_ms: u64,
    #[serde(default)]
    step: Vec<RawStep>,
}

fn default_step_delay_ms() -> u64 {
    50
}

/// A parsed, validated session script.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    /// Pause between consecutive steps
    pub step_delay: Duration,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let raw: RawScript = toml::from_str(source)?;

        let steps = raw
            .step
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                Ok(match step {
                    RawStep::Activate { tool } => Step::Activate { tool },
                    RawStep::Move { x, y } => Step::Move { x, y },
                    RawStep::Click { x, y } => Step::Click { x, y },
                    RawStep::Key { key } => Step::Key(
                        Key::from_name(&key).ok_or(ScriptError::UnknownKey { index, key })?,
                    ),
                    RawStep::Input { input, value } => Step::Input { input, value },
                    RawStep::Wait { ms } => Step::Wait(Duration::from_millis(ms)),
                })
            })
            .collect::<Result<Vec<_>, ScriptError>>()?;

        Ok(Self {
            step_delay: Duration::from_millis(raw.step_delay_ms),
            steps,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Names of every tool the script activates.
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::Activate { tool } => Some(tool.as_str()),
            _ => None,
        })
    }
}

impl Step {
    /// Pause before the step that follows this one.
    pub fn delay_after(&self, step_delay: Duration) -> Duration {
        match self {
            Step::Wait(duration) => *duration,
            _ => step_delay,
        }
    }

    /// Replays the step. Failures are logged; a session keeps going.
    pub fn apply(&self, editor: &mut Editor) {
        debug!("Replaying {:?}", self);
        match self {
            Step::Activate { tool } => {
                if let Err(err) = editor.activate_tool(tool) {
                    warn!("Cannot activate '{tool}': {err}");
                }
            }
            Step::Move { x, y } => editor.pointer_move(*x, *y),
            Step::Click { x, y } => {
                editor.pointer_down(*x, *y, MouseButton::Left);
                editor.pointer_up(*x, *y, MouseButton::Left);
                editor.click(*x, *y);
            }
            Step::Key(key) => {
                if !editor.key_down(*key) {
                    debug!("Key {:?} not handled", key);
                }
            }
            Step::Input { input, value } => editor.set_input(*input, value),
            Step::Wait(_) => {}
        }
    }
}
