// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! One-way analytics event sink.
//!
//! `send` dispatches on a detached task and returns immediately; a failed
//! delivery is logged and dropped. No retries, no queueing, and nothing ever
//! propagates back to the flow that fired the event.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crave_core::analytics::TrackEventRequest;

/// Grace period for in-flight deliveries when an invocation ends.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

pub struct AnalyticsSink {
    client: ApiClient,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl AnalyticsSink {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// Dispatch an event without waiting for the outcome.
    pub fn send(&self, event: TrackEventRequest) {
        let client = self.client.clone();
        let handle = tokio::spawn(async move {
            match client.track_event(&event).await {
                Ok(()) => debug!("analytics event delivered: {:?}", event.event_type),
                Err(e) => warn!("analytics delivery failed: {e}"),
            }
        });
        if let Ok(mut handles) = self.in_flight.lock() {
            handles.push(handle);
        }
    }

    /// Give outstanding deliveries a short grace period. Best effort: events
    /// still in flight after the timeout are abandoned.
    pub async fn drain(&self) {
        let handles: Vec<JoinHandle<()>> = match self.in_flight.lock() {
            Ok(mut handles) => handles.drain(..).collect(),
            Err(_) => return,
        };
        for handle in handles {
            if time::timeout(DRAIN_TIMEOUT, handle).await.is_err() {
                debug!("analytics delivery still in flight at exit, dropping");
            }
        }
    }
}
