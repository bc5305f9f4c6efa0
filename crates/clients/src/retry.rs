//! Injectable retry wrapper for collaborator lookups.
//!
//! The assessment engine is single-attempt by default; wrapping a client in
//! [`Retrying`] adds fixed-backoff retries without the orchestration logic
//! knowing. Only `Unavailable` failures are retried; `NotFound` is a final
//! answer and returns immediately.

use std::time::Duration;

use async_trait::async_trait;
use medirisk_core::{LookupError, NotesLookup, PatientLookup};
use medirisk_types::{Note, Patient};

/// Fixed-backoff retry settings.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(200),
        }
    }
}

/// Wraps any lookup implementation with a [`RetryPolicy`].
#[derive(Clone, Debug)]
pub struct Retrying<L> {
    inner: L,
    policy: RetryPolicy,
}

impl<L> Retrying<L> {
    pub fn new(inner: L, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<L: PatientLookup> PatientLookup for Retrying<L> {
    async fn get_patient(&self, patient_id: &str) -> Result<Patient, LookupError> {
        let mut attempt = 1;
        loop {
            match self.inner.get_patient(patient_id).await {
                Err(LookupError::Unavailable {
                    collaborator,
                    reason,
                }) if attempt < self.policy.max_attempts => {
                    tracing::warn!(%collaborator, attempt, %reason, "patient lookup failed, retrying");
                    tokio::time::sleep(self.policy.backoff).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

#[async_trait]
impl<L: NotesLookup> NotesLookup for Retrying<L> {
    async fn get_notes(&self, patient_id: &str) -> Result<Vec<Note>, LookupError> {
        let mut attempt = 1;
        loop {
            match self.inner.get_notes(patient_id).await {
                Err(LookupError::Unavailable {
                    collaborator,
                    reason,
                }) if attempt < self.policy.max_attempts => {
                    tracing::warn!(%collaborator, attempt, %reason, "notes lookup failed, retrying");
                    tokio::time::sleep(self.policy.backoff).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
