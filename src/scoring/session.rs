use super::client::{RunMode, ScoringClient};
use super::protocol::{ScoringRequest, ScoringResponse};
use crate::error::ScoringError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// Where the latest invocation stands. Terminal once it leaves `Sending`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RunState {
    #[default]
    Idle,
    Sending,
    Succeeded(ScoringResponse),
    Failed(String),
}

/// Identifies one invocation. Only the newest ticket may publish a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket(u64);

impl RunTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Holds the result of the most recent scoring invocation.
///
/// Starting a new invocation never waits for or cancels an outstanding
/// one; it only bumps the generation so the older response is dropped when
/// it lands.
#[derive(Debug, Default)]
pub struct ScoringSession {
    generation: AtomicU64,
    state: Mutex<RunState>,
}

impl ScoringSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RunTicket {
        // Bump under the lock so a slower `begin` cannot overwrite a newer result.
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *state = RunState::Sending;
        RunTicket(gen)
    }

    /// Publishes an outcome. Returns `false` if the ticket was superseded and
    /// the outcome was discarded.
    pub fn complete(
        &self,
        ticket: RunTicket,
        outcome: Result<ScoringResponse, ScoringError>,
    ) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if self.generation.load(Ordering::SeqCst) != ticket.0 {
            debug!("Discarding stale scoring result (generation {})", ticket.0);
            return false;
        }

        *state = match outcome {
            Ok(response) => RunState::Succeeded(response),
            Err(e) => RunState::Failed(user_message(&e)),
        };
        true
    }

    pub fn state(&self) -> RunState {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state(), RunState::Sending)
    }

    /// begin → client call → complete. Returns whether the outcome was applied.
    pub async fn submit(
        &self,
        client: &ScoringClient,
        mode: RunMode,
        request: &ScoringRequest,
    ) -> bool {
        let ticket = self.begin();
        let outcome = client.run(mode, request).await;
        self.complete(ticket, outcome)
    }
}

/// The single string shown to a user for a failed run.
pub fn user_message(err: &ScoringError) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() {
        "Run failed".to_string()
    } else {
        msg
    }
}
