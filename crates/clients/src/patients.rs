//! HTTP client for the patient service.

use async_trait::async_trait;
use medirisk_core::{Collaborator, LookupError, PatientLookup};
use medirisk_types::Patient;

use crate::{build_http, unavailable, ClientBuildError, ClientConfig};

/// Fetches patient records over `GET {base}/{id}`.
///
/// A 404 is a missing patient; any other failure (network error, timeout,
/// non-2xx status, undecodable body) is an outage of the patient service.
#[derive(Clone, Debug)]
pub struct HttpPatientClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpPatientClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        Ok(Self {
            base_url: config.trimmed_base_url(),
            http: build_http(config)?,
        })
    }
}

#[async_trait]
impl PatientLookup for HttpPatientClient {
    async fn get_patient(&self, patient_id: &str) -> Result<Patient, LookupError> {
        let url = format!("{}/{}", self.base_url, patient_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(Collaborator::Patients, e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                patient_id: patient_id.to_owned(),
            });
        }

        let response = response
            .error_for_status()
            .map_err(|e| unavailable(Collaborator::Patients, e))?;

        response
            .json::<Patient>()
            .await
            .map_err(|e| unavailable(Collaborator::Patients, e))
    }
}
