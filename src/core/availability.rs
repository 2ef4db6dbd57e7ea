//! Debounced availability checks with a last-request-wins guard.
//!
//! Every check takes a ticket from a monotonically increasing counter. A
//! check whose ticket is no longer the latest after the debounce delay never
//! reaches the backend; one that is superseded while the request is in flight
//! still completes, but its result is dropped.

use crate::api::backend::ReservationBackend;
use crate::api::models::AvailabilityResponse;
use crate::core::slots::RESERVATION_DURATION_MINUTES;
use crate::utils::time::clock_part;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const FALLBACK_MESSAGE: &str = "Could not check availability.";
pub const IDLE_MESSAGE: &str = "Pick a date/time to check availability.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub time_slot: String,
    pub guests: Option<u32>,
}

/// What the user gets to see for a completed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityView {
    Known(AvailabilityResponse),
    Message(String),
}

impl AvailabilityView {
    /// Map a backend outcome onto a view; failures become a message.
    pub fn from_outcome<E: std::fmt::Display>(outcome: Result<AvailabilityResponse, E>) -> Self {
        match outcome {
            Ok(res) if res.ok => AvailabilityView::Known(res),
            Ok(res) => AvailabilityView::Message(
                res.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            ),
            Err(e) => AvailabilityView::Message(format!("{FALLBACK_MESSAGE} ({e})")),
        }
    }

    pub fn render(&self) -> String {
        match self {
            AvailabilityView::Message(m) => m.clone(),
            AvailabilityView::Known(res) => {
                let state = if res.fully_booked {
                    "Fully booked"
                } else {
                    "Available"
                };
                let mut line = format!(
                    "{state} — {} / {} tables free.",
                    res.available_tables, res.table_count
                );
                if let Some(end) = res.end_time.as_deref().and_then(clock_part) {
                    line.push_str(&format!(
                        " (Ends at {end}, {RESERVATION_DURATION_MINUTES} min)"
                    ));
                }
                line
            }
        }
    }
}

/// Issues request ids and answers whether an id is still the latest.
#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: AtomicU64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// New id; every earlier id becomes stale.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == id
    }
}

pub struct AvailabilityChecker<B> {
    backend: B,
    debounce: Duration,
    guard: RequestGuard,
}

impl<B: ReservationBackend> AvailabilityChecker<B> {
    pub fn new(backend: B, debounce: Duration) -> Self {
        Self {
            backend,
            debounce,
            guard: RequestGuard::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one check. `None` means a newer check was issued meanwhile and this
    /// one's result must not be shown.
    pub async fn check(&self, query: &AvailabilityQuery) -> Option<AvailabilityView> {
        let id = self.guard.issue();

        if query.time_slot.is_empty() {
            return self
                .guard
                .is_current(id)
                .then(|| AvailabilityView::Message(IDLE_MESSAGE.to_string()));
        }

        tokio::time::sleep(self.debounce).await;
        if !self.guard.is_current(id) {
            return None;
        }

        let outcome = self
            .backend
            .availability(&query.time_slot, query.guests)
            .await;

        if !self.guard.is_current(id) {
            return None;
        }

        Some(AvailabilityView::from_outcome(outcome))
    }
}
