use crate::domain::model::ViewContext;
use crate::domain::ports::ViewEventHandler;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps view-lifecycle event names to their handlers, standing in for the
/// hosting framework's controller registration. Handlers are registered once
/// at startup and dispatched with the view context of the firing view.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ViewEventHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, event: &str, handler: Arc<dyn ViewEventHandler>) {
        if self.handlers.insert(event.to_string(), handler).is_some() {
            tracing::warn!("handler for '{}' replaced", event);
        }
    }

    pub fn is_registered(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }

    /// Invokes the handler registered for `event`. Returns `Ok(false)` when
    /// no handler is registered; handler errors propagate to the caller.
    pub async fn dispatch(&self, event: &str, ctx: &mut ViewContext) -> Result<bool> {
        match self.handlers.get(event) {
            Some(handler) => {
                tracing::debug!("dispatching '{}'", event);
                handler.on_modal_open(ctx).await?;
                Ok(true)
            }
            None => {
                tracing::debug!("no handler registered for '{}'", event);
                Ok(false)
            }
        }
    }
}
