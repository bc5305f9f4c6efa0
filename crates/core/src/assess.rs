//! Assessment orchestration.
//!
//! Fetches the patient record and clinical notes from the two external
//! collaborators, computes the patient's age, counts trigger terms in the
//! normalized notes and classifies the risk tier. Each request is stateless
//! and independent; the only shared state is the read-only vocabulary.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use medirisk_types::{AssessmentResult, Note, Patient};

use crate::config::CoreConfig;
use crate::error::{AssessError, AssessResult, LookupError};
use crate::normalize::normalize;
use crate::risk::classify;

/// Read-side view of the patient store.
#[async_trait]
pub trait PatientLookup: Send + Sync {
    /// Resolves a patient by identifier.
    async fn get_patient(&self, patient_id: &str) -> Result<Patient, LookupError>;
}

/// Read-side view of the clinical note store.
#[async_trait]
pub trait NotesLookup: Send + Sync {
    /// Fetches all notes for a patient, in the store's order. A patient with
    /// no notes yields an empty vec, never an error.
    async fn get_notes(&self, patient_id: &str) -> Result<Vec<Note>, LookupError>;
}

/// Orchestrates a single assessment request end to end.
///
/// Holds the two collaborator lookups behind trait objects so transports can
/// be swapped (HTTP clients in production, in-memory fakes in tests, or a
/// retry wrapper around either) without touching this logic.
#[derive(Clone)]
pub struct AssessmentService {
    patients: Arc<dyn PatientLookup>,
    notes: Arc<dyn NotesLookup>,
    config: CoreConfig,
}

impl AssessmentService {
    pub fn new(
        patients: Arc<dyn PatientLookup>,
        notes: Arc<dyn NotesLookup>,
        config: CoreConfig,
    ) -> Self {
        Self {
            patients,
            notes,
            config,
        }
    }

    /// Assesses a patient's diabetes risk.
    ///
    /// The patient and notes fetches are issued concurrently; if either
    /// fails the whole assessment fails and the other result is discarded.
    pub async fn assess(&self, patient_id: &str) -> AssessResult<AssessmentResult> {
        let (patient, notes) = tokio::try_join!(
            self.patients.get_patient(patient_id),
            self.notes.get_notes(patient_id),
        )
        .map_err(|err| into_assess_error(err, patient_id))?;

        let joined = join_normalized(&notes);
        let trigger_count = self.config.vocabulary().count_triggers(&joined);

        let birth_date = NaiveDate::parse_from_str(&patient.birth_date, "%Y-%m-%d").map_err(
            |_| AssessError::InvalidBirthDate {
                patient_id: patient_id.to_owned(),
                birth_date: patient.birth_date.clone(),
            },
        )?;
        let age = age_in_years(birth_date, Local::now().date_naive());

        let risk = classify(trigger_count, patient.gender, age);

        tracing::debug!(patient_id, trigger_count, age, risk = %risk, "assessment complete");

        Ok(AssessmentResult {
            patient_id: patient_id.to_owned(),
            age,
            trigger_count,
            risk,
        })
    }
}

/// Normalizes each note body independently and joins them with single
/// spaces, preserving the store's order.
fn join_normalized(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|n| normalize(n.note.as_deref().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole years between `birth_date` and `today`, floored.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

fn into_assess_error(err: LookupError, patient_id: &str) -> AssessError {
    match err {
        LookupError::NotFound { patient_id } => AssessError::PatientNotFound { patient_id },
        LookupError::Unavailable {
            collaborator,
            reason,
        } => AssessError::CollaboratorUnavailable {
            collaborator,
            patient_id: patient_id.to_owned(),
            reason,
        },
    }
}
