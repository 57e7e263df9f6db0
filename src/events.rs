use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use crate::plugins::contacts::models::ContactStatus;
use crate::plugins::registrations::models::RegistrationStatus;

const EVENT_BUFFER: usize = 256;

/// Domain events published by plugins. Subscribers (admin list refreshers,
/// notifiers) react to these instead of polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudioEvent {
    ContactSubmitted { id: Uuid },
    ContactStatusChanged { id: Uuid, from: ContactStatus, to: ContactStatus },
    ContactDeleted { id: Uuid },
    RegistrationSubmitted { id: Uuid, class_slug: String },
    RegistrationStatusChanged { id: Uuid, from: RegistrationStatus, to: RegistrationStatus },
    RegistrationDeleted { id: Uuid },
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StudioEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUFFER);
        Self { sender }
    }

    /// Publishes to current subscribers; returns how many received it.
    pub fn publish(&self, event: StudioEvent) -> usize {
        debug!(?event, "publish");
        // no subscribers is not an error
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StudioEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
