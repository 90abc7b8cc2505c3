//! Synchronous publish/subscribe hub for cross-component events.
//!
//! SYSTEM CONTEXT
//! ==============
//! The review form and the product live in different branches of the
//! component tree. The root creates one [`EventBus`] and provides it through
//! Leptos context; the form publishes and the product subscribes.
//!
//! Delivery is synchronous: [`EventBus::publish`] runs every handler
//! registered for the event's topic, in registration order, before it
//! returns. The registry lock is released before handlers run, so a handler
//! may publish or subscribe again.

#[cfg(test)]
#[path = "event_bus_test.rs"]
mod event_bus_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::state::review::Review;

/// Named channel identifying a class of events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    ReviewSubmitted,
}

impl Topic {
    /// Wire name of the topic.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReviewSubmitted => "review-submitted",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events that flow through the bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BusEvent {
    /// A review passed validation in the review form.
    ReviewSubmitted(Review),
}

impl BusEvent {
    #[must_use]
    pub fn topic(&self) -> Topic {
        match self {
            Self::ReviewSubmitted(_) => Topic::ReviewSubmitted,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(&BusEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: HashMap<Topic, Vec<(SubscriptionId, Handler)>>,
}

/// Shared publish/subscribe hub. Clones share one registry.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry();
        let counts: HashMap<&'static str, usize> = registry
            .handlers
            .iter()
            .map(|(topic, list)| (topic.as_str(), list.len()))
            .collect();
        f.debug_struct("EventBus").field("subscribers", &counts).finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `topic`. Handlers run in registration order.
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: Fn(&BusEvent) + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let mut registry = self.registry();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.handlers.entry(topic).or_default().push((id, handler));
        log::debug!("bus: subscribed {id:?} to {topic}");
        id
    }

    /// Remove a registration. Returns `false` if `id` is unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry();
        for list in registry.handlers.values_mut() {
            if let Some(pos) = list.iter().position(|(sid, _)| *sid == id) {
                list.remove(pos);
                log::debug!("bus: unsubscribed {id:?}");
                return true;
            }
        }
        false
    }

    /// Deliver `event` to every handler currently registered for its topic.
    ///
    /// Returns the number of handlers invoked.
    pub fn publish(&self, event: BusEvent) -> usize {
        let topic = event.topic();

        // Snapshot so handlers can re-enter the bus.
        let handlers: Vec<Handler> = self
            .registry()
            .handlers
            .get(&topic)
            .map(|list| list.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();

        log::debug!("bus: publish {topic} to {} handler(s)", handlers.len());
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    /// Number of handlers registered for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry().handlers.get(&topic).map_or(0, Vec::len)
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
