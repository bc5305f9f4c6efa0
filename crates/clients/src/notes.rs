//! HTTP client for the note service.

use async_trait::async_trait;
use medirisk_core::{Collaborator, LookupError, NotesLookup};
use medirisk_types::Note;

use crate::{build_http, unavailable, ClientBuildError, ClientConfig};

/// Fetches a patient's notes over `GET {base}/{patientId}`.
///
/// A patient with no notes comes back as an empty array; a null body is
/// mapped to the empty list as well. Any transport or status failure is an
/// outage of the note service.
#[derive(Clone, Debug)]
pub struct HttpNotesClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpNotesClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        Ok(Self {
            base_url: config.trimmed_base_url(),
            http: build_http(config)?,
        })
    }
}

#[async_trait]
impl NotesLookup for HttpNotesClient {
    async fn get_notes(&self, patient_id: &str) -> Result<Vec<Note>, LookupError> {
        let url = format!("{}/{}", self.base_url, patient_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(Collaborator::Notes, e))?
            .error_for_status()
            .map_err(|e| unavailable(Collaborator::Notes, e))?;

        let notes = response
            .json::<Option<Vec<Note>>>()
            .await
            .map_err(|e| unavailable(Collaborator::Notes, e))?
            .unwrap_or_default();

        Ok(notes)
    }
}
