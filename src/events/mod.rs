use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

/// Domain events published after a write has committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    // Supplier events
    SupplierCreated(Uuid),
    SupplierUpdated(Uuid),
    SupplierDeleted {
        supplier_id: Uuid,
        parts_removed: u64,
        price_breaks_removed: u64,
    },

    // Supplier part events
    SupplierPartCreated {
        supplier_part_id: Uuid,
        supplier_id: Uuid,
        part_id: Uuid,
    },
    SupplierPartUpdated(Uuid),
    SupplierPartDeleted {
        supplier_part_id: Uuid,
        price_breaks_removed: u64,
    },

    // Price break events
    PriceBreakCreated {
        price_break_id: Uuid,
        supplier_part_id: Uuid,
    },
    PriceBreakUpdated(Uuid),
    PriceBreakDeleted(Uuid),

    // External part stand-in
    PartRegistered(Uuid),
    PartDeleted {
        part_id: Uuid,
        parts_removed: u64,
        price_breaks_removed: u64,
    },
}

impl Event {
    /// Stable name used as the log target for this event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::SupplierCreated(_) => "supplier_created",
            Event::SupplierUpdated(_) => "supplier_updated",
            Event::SupplierDeleted { .. } => "supplier_deleted",
            Event::SupplierPartCreated { .. } => "supplier_part_created",
            Event::SupplierPartUpdated(_) => "supplier_part_updated",
            Event::SupplierPartDeleted { .. } => "supplier_part_deleted",
            Event::PriceBreakCreated { .. } => "price_break_created",
            Event::PriceBreakUpdated(_) => "price_break_updated",
            Event::PriceBreakDeleted(_) => "price_break_deleted",
            Event::PartRegistered(_) => "part_registered",
            Event::PartDeleted { .. } => "part_deleted",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Creates a sender together with its receiving end.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Drains the channel, logging each event, until every sender is dropped.
///
/// Returns the number of events seen.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) -> u64 {
    info!("Starting event processing loop");

    let mut processed = 0;
    while let Some(event) = rx.recv().await {
        processed += 1;
        match &event {
            Event::SupplierDeleted {
                supplier_id,
                parts_removed,
                price_breaks_removed,
            } => info!(
                %supplier_id,
                parts_removed,
                price_breaks_removed,
                "Supplier deleted with dependents"
            ),
            Event::PartDeleted {
                part_id,
                parts_removed,
                price_breaks_removed,
            } => info!(
                %part_id,
                parts_removed,
                price_breaks_removed,
                "Part deleted with dependents"
            ),
            other => debug!(event = other.name(), "Received event: {:?}", other),
        }
    }

    info!(processed, "Event processing loop stopped");
    processed
}
