//! Named form inputs that drawing tools can subscribe to.

use crate::host::InputBindings;
use serde::Deserialize;
use std::collections::HashMap;

/// Identifies one of the host's tool-option inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputId {
    /// Free-form text to place
    TextString,
    /// Font family picker
    TextFont,
    /// Font size in pixels
    TextSize,
    /// Outline width in pixels
    LineWidth,
}

impl InputId {
    /// Event an edit of this input fires.
    ///
    /// Pickers report on commit of a selection, free-form fields on every edit.
    pub const fn change_event(self) -> ChangeEvent {
        match self {
            InputId::TextFont => ChangeEvent::Change,
            InputId::TextString | InputId::TextSize | InputId::LineWidth => ChangeEvent::Input,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputId::TextString => "text_string",
            InputId::TextFont => "text_font",
            InputId::TextSize => "text_size",
            InputId::LineWidth => "line_width",
        }
    }
}

/// Kind of value-change notification an input emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeEvent {
    /// Fired once a selection or toggle is committed
    Change,
    /// Fired on every edit
    Input,
}

/// Inputs the text tool redraws on, with the event each one fires.
pub const TEXT_TOOL_BINDINGS: [(InputId, ChangeEvent); 4] = [
    (InputId::TextString, ChangeEvent::Input),
    (InputId::TextFont, ChangeEvent::Change),
    (InputId::TextSize, ChangeEvent::Input),
    (InputId::LineWidth, ChangeEvent::Input),
];

/// Host-side store of input values and attached listeners.
///
/// Attaching the same (input, event) pair twice keeps a single listener, so a
/// tool that re-runs its setup cannot stack duplicate notifications.
#[derive(Debug, Default)]
pub struct BoundInputs {
    values: HashMap<InputId, String>,
    listeners: Vec<(InputId, ChangeEvent)>,
}

impl BoundInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of an input with its initial value.
    pub fn with_value(mut self, id: InputId, value: impl Into<String>) -> Self {
        self.values.insert(id, value.into());
        self
    }

    /// Stores a new value for a provided input.
    ///
    /// Returns the event to dispatch when a listener is attached for it, or
    /// `None` when nobody listens (or the host does not provide the input).
    pub fn set(&mut self, id: InputId, value: impl Into<String>) -> Option<ChangeEvent> {
        let slot = self.values.get_mut(&id)?;
        *slot = value.into();

        let event = id.change_event();
        self.is_listening(id, event).then_some(event)
    }

    pub fn is_listening(&self, id: InputId, event: ChangeEvent) -> bool {
        self.listeners.contains(&(id, event))
    }
}

impl InputBindings for BoundInputs {
    fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    fn value(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    fn attach(&mut self, id: InputId, event: ChangeEvent) {
        if !self.is_listening(id, event) {
            self.listeners.push((id, event));
        }
    }

    fn detach(&mut self, id: InputId, event: ChangeEvent) {
        self.listeners.retain(|listener| *listener != (id, event));
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_input_kinds() {
        for (id, event) in TEXT_TOOL_BINDINGS {
            assert_eq!(id.change_event(), event, "{}", id.name());
        }
    }

    #[test]
    fn set_reports_event_only_when_listening() {
        let mut inputs = BoundInputs::new().with_value(InputId::TextString, "a");
        assert_eq!(inputs.set(InputId::TextString, "b"), None);
        assert_eq!(inputs.value(InputId::TextString), Some("b"));

        inputs.attach(InputId::TextString, ChangeEvent::Input);
        assert_eq!(
            inputs.set(InputId::TextString, "c"),
            Some(ChangeEvent::Input)
        );
    }

    #[test]
    fn set_ignores_inputs_the_host_does_not_provide() {
        let mut inputs = BoundInputs::new();
        inputs.attach(InputId::TextSize, ChangeEvent::Input);
        assert_eq!(inputs.set(InputId::TextSize, "12"), None);
        assert!(!inputs.has(InputId::TextSize));
        assert_eq!(inputs.value(InputId::TextSize), None);
    }

    #[test]
    fn attach_is_idempotent_and_detach_removes() {
        let mut inputs = BoundInputs::new().with_value(InputId::TextFont, "serif");
        inputs.attach(InputId::TextFont, ChangeEvent::Change);
        inputs.attach(InputId::TextFont, ChangeEvent::Change);
        assert_eq!(inputs.listener_count(), 1);

        inputs.detach(InputId::TextFont, ChangeEvent::Change);
        assert_eq!(inputs.listener_count(), 0);
        assert!(!inputs.is_listening(InputId::TextFont, ChangeEvent::Change));
    }
}
