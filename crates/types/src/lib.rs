//! # MediRisk Types
//!
//! Shared domain and wire types for the MediRisk assessment service.
//!
//! Contains:
//! - Collaborator wire models (`Patient`, `Note`) matching the JSON the
//!   patient and note services return
//! - Assessment vocabulary types (`Gender`, `RiskTier`)
//! - The assessment response (`AssessmentResult`)
//!
//! Used by `medirisk-core`, `medirisk-clients` and the service binary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Patient gender as reported by the patient service.
///
/// The wire format only defines `MALE` and `FEMALE`; any other value is
/// mapped to [`Gender::Unknown`] on deserialization rather than failing the
/// whole record. Unknown never satisfies a gender-specific risk rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Error returned when a risk tier label cannot be recognised.
#[derive(Debug, thiserror::Error)]
#[error("unknown risk tier label: {0:?}")]
pub struct UnknownRiskTier(pub String);

/// One of the four diabetes risk classifications.
///
/// The wire labels are fixed strings consumed by the front end:
/// `"None"`, `"Borderline"`, `"In Danger"` and `"Early onset"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskTier {
    None,
    Borderline,
    #[serde(rename = "In Danger")]
    InDanger,
    #[serde(rename = "Early onset")]
    EarlyOnset,
}

impl RiskTier {
    /// The exact label used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::None => "None",
            RiskTier::Borderline => "Borderline",
            RiskTier::InDanger => "In Danger",
            RiskTier::EarlyOnset => "Early onset",
        }
    }

    /// Parse a wire label back into a tier.
    pub fn from_label(label: &str) -> Result<Self, UnknownRiskTier> {
        match label {
            "None" => Ok(RiskTier::None),
            "Borderline" => Ok(RiskTier::Borderline),
            "In Danger" => Ok(RiskTier::InDanger),
            "Early onset" => Ok(RiskTier::EarlyOnset),
            other => Err(UnknownRiskTier(other.to_owned())),
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Patient record as returned by the patient service.
///
/// The birth date is carried as the unparsed `YYYY-MM-DD` wire string; the
/// assessment engine parses it and reports invalid values explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Clinical note as returned by the note service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier of the patient the note belongs to.
    #[serde(rename = "patId", default)]
    pub pat_id: Option<String>,
    /// Display name of the patient, carried for the practitioner UI.
    #[serde(default)]
    pub patient: Option<String>,
    /// Free-text note body. Absent bodies are treated as empty text.
    #[serde(default)]
    pub note: Option<String>,
}

/// Outcome of a single assessment request.
///
/// Built fresh per request and never persisted; `trigger_count` is always
/// within `[0, vocabulary length]` and `age` is non-negative for any valid
/// past birth date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub patient_id: String,
    pub age: i32,
    pub trigger_count: usize,
    pub risk: RiskTier,
}
