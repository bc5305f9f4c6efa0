//! # MediRisk Core
//!
//! The diabetes risk assessment engine.
//!
//! This crate contains the only non-trivial logic in the system:
//! - Text normalization for trigger matching (`normalize`)
//! - Trigger-term detection against a fixed vocabulary (`triggers`)
//! - The risk decision table (`risk`)
//! - Orchestration of an assessment request (`assess`)
//!
//! **No transport concerns**: HTTP clients for the patient and note services
//! live in `medirisk-clients`; the REST surface lives in the `medirisk-run`
//! binary. The engine only sees the `PatientLookup` and `NotesLookup` traits.

pub mod assess;
pub mod config;
pub mod error;
pub mod normalize;
pub mod risk;
pub mod triggers;

pub use assess::{age_in_years, AssessmentService, NotesLookup, PatientLookup};
pub use config::{ConfigError, CoreConfig};
pub use error::{AssessError, AssessResult, Collaborator, LookupError};
pub use normalize::normalize;
pub use risk::classify;
pub use triggers::{TriggerVocabulary, DEFAULT_TRIGGER_TERMS};
