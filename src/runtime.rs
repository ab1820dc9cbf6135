//! calloop-driven host runtime.
//!
//! Redraw timers become calloop [`Timer`] sources whose callbacks route the
//! tick into the [`Editor`]; session playback is one more timer source that
//! applies a script step each time it fires and stops the loop when the
//! script runs out.

use crate::config::Config;
use crate::draw::Layer;
use crate::editor::{Editor, EditorError};
use crate::session::Script;
use crate::timer::{TimerId, TimerService};
use crate::tool::{PointerTool, RegistryError};
use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopHandle, RegistrationToken};
use log::{debug, info, warn};
use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Event loop error: {0}")]
    Loop(#[from] calloop::Error),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// [`TimerService`] backed by calloop timer sources.
pub struct CalloopTimers {
    handle: LoopHandle<'static, Editor>,
    tokens: BTreeMap<TimerId, RegistrationToken>,
    next_id: u64,
}

impl CalloopTimers {
    pub fn new(handle: LoopHandle<'static, Editor>) -> Self {
        Self {
            handle,
            tokens: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl TimerService for CalloopTimers {
    fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);

        let inserted = self.handle.insert_source(
            Timer::from_duration(interval),
            move |_deadline, _, editor: &mut Editor| {
                editor.timer_tick(id);
                TimeoutAction::ToDuration(interval)
            },
        );

        match inserted {
            Ok(token) => {
                self.tokens.insert(id, token);
                debug!("Timer {:?} every {:?}", id, interval);
            }
            // The id stays unknown to `active_timers`, so nothing ever ticks it
            Err(err) => warn!("Failed to schedule timer {:?}: {}", id, err.error),
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(token) = self.tokens.remove(&id) {
            self.handle.remove(token);
            debug!("Timer {:?} cancelled", id);
        }
    }

    fn active_timers(&self) -> Vec<TimerId> {
        self.tokens.keys().copied().collect()
    }
}

/// Replays `script` on a fresh `width`x`height` image and returns the
/// resulting layer.
///
/// The pointer tool is active when playback starts. Whatever tool is active
/// at the end is deactivated, so uncommitted previews are discarded.
pub fn run_session(
    script: &Script,
    width: i32,
    height: i32,
    config: &Config,
) -> Result<Layer, RuntimeError> {
    let mut event_loop: EventLoop<'static, Editor> = EventLoop::try_new()?;
    let timers = CalloopTimers::new(event_loop.handle());
    let mut editor = Editor::new(width, height, config, Box::new(timers))?;

    for name in script.tool_names() {
        editor.tools().lookup(name)?;
    }
    editor.activate_tool(PointerTool::ID.as_str())?;

    let mut steps: VecDeque<_> = script.steps.iter().cloned().collect();
    let step_delay = script.step_delay;
    let signal = event_loop.get_signal();

    event_loop
        .handle()
        .insert_source(
            Timer::from_duration(step_delay),
            move |_deadline, _, editor: &mut Editor| match steps.pop_front() {
                Some(step) => {
                    step.apply(editor);
                    TimeoutAction::ToDuration(step.delay_after(step_delay))
                }
                None => {
                    signal.stop();
                    TimeoutAction::Drop
                }
            },
        )
        .map_err(|err| err.error)?;

    info!(
        "Replaying {} steps on a {width}x{height} image",
        script.steps.len()
    );
    event_loop.run(None::<Duration>, &mut editor, |_| {})?;

    Ok(editor.into_layer())
}
