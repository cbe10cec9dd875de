//! Input handling results
//!
//! Handlers return `InputResult::Consumed` when an event had an effect (or
//! was deliberately swallowed) and `InputResult::Ignored` when it means
//! nothing in the current context, so the caller may act on it instead.
//! Work that needs more than the handler can reach (writing the file needs
//! the session's path) is queued on the `InputContext` as a `DeferredAction`.

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// The input was handled - stop propagation.
    Consumed,
    /// The input was not handled.
    Ignored,
}

impl InputResult {
    /// Returns true if the input was consumed.
    pub fn is_consumed(self) -> bool {
        self == InputResult::Consumed
    }
}

/// Actions that need to be executed after input handling completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Write the buffer to the session's file
    Save,
}

/// Context passed to input handlers
#[derive(Debug, Default)]
pub struct InputContext {
    /// Actions to execute after input handling
    pub deferred_actions: Vec<DeferredAction>,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, action: DeferredAction) {
        self.deferred_actions.push(action);
    }

    /// Take the queued actions, leaving the context empty
    pub fn drain(&mut self) -> Vec<DeferredAction> {
        std::mem::take(&mut self.deferred_actions)
    }
}
