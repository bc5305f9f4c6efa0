use std::fmt;

/// Identifies which external collaborator a failure came from, so callers can
/// diagnose without retrying blindly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collaborator {
    Patients,
    Notes,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::Patients => f.write_str("patient service"),
            Collaborator::Notes => f.write_str("note service"),
        }
    }
}

/// Failures surfaced by the collaborator lookup traits.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no patient record for id {patient_id}")]
    NotFound { patient_id: String },
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable {
        collaborator: Collaborator,
        reason: String,
    },
}

/// Failures of a whole assessment request.
///
/// No partial results exist: any of these aborts the request.
#[derive(Debug, thiserror::Error)]
pub enum AssessError {
    #[error("no patient record for id {patient_id}")]
    PatientNotFound { patient_id: String },
    #[error("{collaborator} unavailable while assessing patient {patient_id}: {reason}")]
    CollaboratorUnavailable {
        collaborator: Collaborator,
        patient_id: String,
        reason: String,
    },
    #[error("patient {patient_id} has invalid birth date {birth_date:?}: expected YYYY-MM-DD")]
    InvalidBirthDate {
        patient_id: String,
        birth_date: String,
    },
}

pub type AssessResult<T> = std::result::Result<T, AssessError>;
