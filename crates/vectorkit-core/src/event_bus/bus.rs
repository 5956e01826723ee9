//! The editor's outbound notification channel.
//!
//! Handlers registered with [`EventBus::subscribe`] run on the publishing
//! thread, so a control panel sees a customiser transition before the call
//! that caused it returns. Async consumers take a broadcast [`EventBus::receiver`]
//! instead.

use std::collections::{HashMap, VecDeque};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};
use crate::types::{thread_safe_rw, DataCallback, SubscriptionMap, ThreadSafeRw};

/// Handle returned by a subscription, used to cancel it.
///
/// Also used by the selection registry for its observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Which events a handler is interested in.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Events buffered per async receiver before it lags.
    pub channel_capacity: usize,
    /// Keep published events for later inspection.
    pub enable_history: bool,
    /// Oldest events are dropped past this many.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
            enable_history: false,
            max_history_size: 1000,
        }
    }
}

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    handlers: SubscriptionMap<SubscriptionId, (EventFilter, DataCallback<AppEvent>)>,
    history: ThreadSafeRw<VecDeque<AppEvent>>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            handlers: thread_safe_rw(HashMap::new()),
            history: thread_safe_rw(VecDeque::new()),
            config,
        }
    }

    /// Record `event`, run the matching handlers, then broadcast it.
    ///
    /// Returns how many handlers and receivers were reached. Nobody listening
    /// is normal for a headless editor and is not an error.
    pub fn publish(&self, event: AppEvent) -> usize {
        tracing::trace!("Publishing {}", event.description());

        if self.config.enable_history {
            let mut history = self.history.write();
            history.push_back(event.clone());
            while history.len() > self.config.max_history_size {
                history.pop_front();
            }
        }

        let handlers = self.handlers.read();
        let mut reached = 0;
        for (filter, handler) in handlers.values() {
            if filter.matches(&event) {
                handler(event.clone());
                reached += 1;
            }
        }

        reached + self.sender.send(event).unwrap_or(0)
    }

    /// Register a handler run on the publishing thread.
    ///
    /// The handler must not publish on this bus.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.write().insert(id, (filter, Box::new(handler)));
        tracing::debug!("Event handler {} registered", id);
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Event handler {} removed", id);
        }
        removed
    }

    /// A receiver for consumers living in a tokio task.
    ///
    /// It sees every event published after this call.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Retained events, oldest first; always empty when history is disabled.
    pub fn history(&self) -> Vec<AppEvent> {
        self.history.read().iter().cloned().collect()
    }

    pub fn clear_history(&self) {
        self.history.write().clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count())
            .field("config", &self.config)
            .finish()
    }
}
