//! Tool registry and the tool-switch routine.

use super::{PointerTool, TextTool, Tool, ToolContext, ToolId};
use crate::input::ToolEvent;
use log::{debug, info, warn};
use thiserror::Error;

/// Builds a tool, given the id of the tool active before it.
pub type ToolFactory = fn(Option<ToolId>) -> Box<dyn Tool>;

/// Errors returned when switching tools.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Tool '{0}' refused activation")]
    Refused(ToolId),
}

/// Registered tool factories plus the single active tool.
///
/// The registry is the only owner of a live tool, which is what keeps
/// "exactly one tool active" true: switching always deactivates the current
/// tool before the next one is activated.
#[derive(Default)]
pub struct ToolRegistry {
    factories: Vec<(ToolId, ToolFactory)>,
    active: Option<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the pointer and text tools.
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register(PointerTool::ID, |_| Box::new(PointerTool::new()));
        registry.register(TextTool::ID, |previous| Box::new(TextTool::new(previous)));
        registry
    }

    /// Registers a factory, replacing any previous one with the same id.
    pub fn register(&mut self, id: ToolId, factory: ToolFactory) {
        if let Some(slot) = self.factories.iter_mut().find(|(known, _)| *known == id) {
            debug!("Replacing factory for tool '{id}'");
            slot.1 = factory;
        } else {
            self.factories.push((id, factory));
        }
    }

    /// Resolves a tool name to its registered id.
    pub fn lookup(&self, name: &str) -> Result<ToolId, RegistryError> {
        self.factories
            .iter()
            .map(|(id, _)| *id)
            .find(|id| id.as_str() == name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = ToolId> + '_ {
        self.factories.iter().map(|(id, _)| *id)
    }

    pub fn active_id(&self) -> Option<ToolId> {
        self.active.as_ref().map(|tool| tool.id())
    }

    pub fn active_mut(&mut self) -> Option<&mut (dyn Tool + 'static)> {
        self.active.as_deref_mut()
    }

    /// Makes `id` the active tool.
    ///
    /// The new tool is built with the current tool's id as its "previous
    /// tool". If its capability check fails, the current tool stays active.
    /// Activating the tool that is already active does nothing.
    pub fn activate(
        &mut self,
        id: ToolId,
        trigger: Option<&ToolEvent>,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), RegistryError> {
        if self.active_id() == Some(id) {
            debug!("Tool '{id}' already active");
            return Ok(());
        }

        let factory = self
            .factories
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, factory)| *factory)
            .ok_or_else(|| RegistryError::UnknownTool(id.to_string()))?;

        let previous = self.active_id();
        let mut candidate = factory(previous);

        if !candidate.pre_activate(ctx) {
            warn!("Tool '{id}' cannot be activated");
            return Err(RegistryError::Refused(id));
        }

        self.deactivate_active(ctx);

        if !candidate.activate(ctx, trigger) {
            warn!("Tool '{id}' failed to activate; no tool is active");
            return Err(RegistryError::Refused(id));
        }

        info!("Switched tool: {:?} -> '{id}'", previous.map(|p| p.as_str()));
        self.active = Some(candidate);
        Ok(())
    }

    /// Deactivates and drops the active tool, returning its id.
    pub fn deactivate_active(&mut self, ctx: &mut ToolContext<'_>) -> Option<ToolId> {
        let mut current = self.active.take()?;
        let id = current.id();
        if !current.deactivate(ctx) {
            warn!("Tool '{id}' reported an incomplete deactivation");
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::InputBindings;
    use crate::input::Key;
    use crate::timer::TimerService;
    use crate::tool::testing::Harness;

    #[test]
    fn lookup_resolves_builtin_ids() {
        let registry = ToolRegistry::with_builtin_tools();
        assert_eq!(registry.lookup("text"), Ok(TextTool::ID));
        assert_eq!(registry.lookup("pointer"), Ok(PointerTool::ID));
        assert_eq!(
            registry.lookup("lasso"),
            Err(RegistryError::UnknownTool("lasso".into()))
        );
        assert_eq!(registry.ids().count(), 2);
    }

    #[test]
    fn register_replaces_existing_factory() {
        let mut registry = ToolRegistry::with_builtin_tools();
        registry.register(TextTool::ID, |_| Box::new(TextTool::new(None)));
        assert_eq!(registry.ids().count(), 2);
    }

    #[test]
    fn switching_deactivates_outgoing_tool() {
        let mut h = Harness::new(200, 100);
        let mut registry = ToolRegistry::with_builtin_tools();

        registry
            .activate(PointerTool::ID, None, &mut h.ctx())
            .unwrap();
        registry.activate(TextTool::ID, None, &mut h.ctx()).unwrap();
        assert_eq!(registry.active_id(), Some(TextTool::ID));
        assert_eq!(h.timers.active_count(), 1);
        assert_eq!(h.inputs.listener_count(), 4);

        registry
            .activate(PointerTool::ID, None, &mut h.ctx())
            .unwrap();
        assert_eq!(registry.active_id(), Some(PointerTool::ID));
        assert_eq!(h.timers.active_count(), 0);
        assert_eq!(h.inputs.listener_count(), 0);
    }

    #[test]
    fn refused_activation_keeps_current_tool() {
        let mut h = Harness::new(200, 100);
        h.surface.text_supported = false;
        let mut registry = ToolRegistry::with_builtin_tools();
        registry
            .activate(PointerTool::ID, None, &mut h.ctx())
            .unwrap();

        assert_eq!(
            registry.activate(TextTool::ID, None, &mut h.ctx()),
            Err(RegistryError::Refused(TextTool::ID))
        );
        assert_eq!(registry.active_id(), Some(PointerTool::ID));
        assert_eq!(h.host.errors.len(), 1);
        assert_eq!(h.timers.active_count(), 0);
    }

    #[test]
    fn new_tool_remembers_the_one_it_replaced() {
        let mut h = Harness::new(200, 100);
        let mut registry = ToolRegistry::with_builtin_tools();
        registry
            .activate(PointerTool::ID, None, &mut h.ctx())
            .unwrap();
        registry.activate(TextTool::ID, None, &mut h.ctx()).unwrap();

        let handled = registry
            .active_mut()
            .map(|tool| tool.on_key_down(&mut h.ctx(), Key::Escape));
        assert_eq!(handled, Some(true));
        assert_eq!(h.host.activations[0].0, PointerTool::ID);
    }

    #[test]
    fn reactivating_active_tool_is_noop() {
        let mut h = Harness::new(200, 100);
        let mut registry = ToolRegistry::with_builtin_tools();
        registry.activate(TextTool::ID, None, &mut h.ctx()).unwrap();
        registry.activate(TextTool::ID, None, &mut h.ctx()).unwrap();
        assert_eq!(h.timers.active_count(), 1);
    }

    #[test]
    fn deactivate_active_releases_resources() {
        let mut h = Harness::new(200, 100);
        let mut registry = ToolRegistry::with_builtin_tools();
        registry.activate(TextTool::ID, None, &mut h.ctx()).unwrap();

        assert_eq!(registry.deactivate_active(&mut h.ctx()), Some(TextTool::ID));
        assert_eq!(registry.active_id(), None);
        assert_eq!(h.timers.active_count(), 0);
        assert_eq!(registry.deactivate_active(&mut h.ctx()), None);
    }
}
