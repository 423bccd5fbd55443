//! Audit trail of lot activity.
//!
//! Sinks are optional and pluggable; the lot records one event per park,
//! leave, or rejected park once the banks and registry are settled.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::assignment::Assignment;
use crate::util::clock::now_ms;

/// What happened to the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LotAction {
    /// The vehicle received an assignment.
    Parked,
    /// The vehicle left and its spots were freed.
    Left,
    /// A park request was turned away.
    Rejected,
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotEvent {
    /// Event identifier.
    pub event_id: String,
    /// Vehicle the event concerns.
    pub vehicle_id: String,
    /// Action taken.
    pub action: LotAction,
    /// Floor involved, if any spots were.
    pub floor: Option<usize>,
    /// Spots taken or freed.
    pub spots: Vec<usize>,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context, e.g. the rejection reason.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: LotEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<LotEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<LotEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: LotEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Build an event with a fresh id and the current timestamp.
pub fn build_lot_event(
    vehicle_id: impl Into<String>,
    action: LotAction,
    assignment: Option<&Assignment>,
    detail: Option<String>,
) -> LotEvent {
    LotEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        vehicle_id: vehicle_id.into(),
        action,
        floor: assignment.map(Assignment::floor),
        spots: assignment.map(|a| a.spots().to_vec()).unwrap_or_default(),
        created_at_ms: now_ms(),
        detail,
    }
}
