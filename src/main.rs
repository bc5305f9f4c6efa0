use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use medirisk_clients::{ClientConfig, HttpNotesClient, HttpPatientClient};
use medirisk_core::{AssessError, AssessmentService, CoreConfig, TriggerVocabulary};
use medirisk_types::{AssessmentResult, RiskTier};

/// Application state shared across REST API handlers
///
/// Holds the assessment service, which owns the collaborator clients and
/// the trigger vocabulary.
#[derive(Clone)]
struct AppState {
    assessor: AssessmentService,
}

/// Health check response body.
#[derive(serde::Serialize, utoipa::ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

/// Error response body returned by the assess endpoint.
#[derive(serde::Serialize, utoipa::ToSchema)]
struct ErrorRes {
    error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, assess_patient),
    components(schemas(HealthRes, ErrorRes, AssessmentResult, RiskTier))
)]
struct ApiDoc;

/// Main entry point for the MediRisk assessment service
///
/// Starts the REST server exposing the diabetes risk assessment endpoint.
/// The patient and note stores are external services reached over HTTP.
///
/// # Environment Variables
/// - `MEDIRISK_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `PATIENT_SERVICE_URL`: base URL of the patient service
/// - `NOTE_SERVICE_URL`: base URL of the note service
/// - `INTERNAL_AUTH_TOKEN`: value sent as `X-Internal-Auth` to both services
/// - `COLLABORATOR_TIMEOUT_MS`: per-request timeout for collaborator calls
///   (default: 5000)
/// - `MEDIRISK_TRIGGER_TERMS`: comma-separated trigger vocabulary override
///   (default: the built-in eleven terms)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medirisk_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEDIRISK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let patient_url = std::env::var("PATIENT_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:8081/api/patient".into());
    let note_url = std::env::var("NOTE_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:8082/api/note".into());
    let auth_token = std::env::var("INTERNAL_AUTH_TOKEN").ok();
    let timeout_ms: u64 = std::env::var("COLLABORATOR_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5_000);
    let timeout = Duration::from_millis(timeout_ms);

    tracing::info!("++ Starting MediRisk REST on {}", addr);
    tracing::info!("++ Patient service at {}", patient_url);
    tracing::info!("++ Note service at {}", note_url);

    let mut patient_cfg = ClientConfig::new(patient_url).with_timeout(timeout);
    let mut note_cfg = ClientConfig::new(note_url).with_timeout(timeout);
    if let Some(token) = auth_token {
        patient_cfg = patient_cfg.with_internal_auth_token(token.clone());
        note_cfg = note_cfg.with_internal_auth_token(token);
    }

    let vocabulary = match std::env::var("MEDIRISK_TRIGGER_TERMS") {
        Ok(csv) => TriggerVocabulary::new(csv.split(',')),
        Err(_) => TriggerVocabulary::default(),
    };
    let core_cfg = CoreConfig::new(vocabulary)?;

    let patients = Arc::new(HttpPatientClient::new(&patient_cfg)?);
    let notes = Arc::new(HttpNotesClient::new(&note_cfg)?);
    let assessor = AssessmentService::new(patients, notes, core_cfg);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/assess/:patient_id", get(assess_patient))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { assessor });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "MediRisk is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/assess/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Assessment result", body = AssessmentResult),
        (status = 404, description = "Unknown patient", body = ErrorRes),
        (status = 422, description = "Patient record has an invalid birth date", body = ErrorRes),
        (status = 502, description = "A collaborator service is unavailable", body = ErrorRes)
    )
)]
/// Assess a patient's diabetes risk
///
/// Fetches the patient record and clinical notes from the collaborator
/// services, counts risk-indicator trigger terms in the notes and returns
/// the computed age, trigger count and risk tier.
async fn assess_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<AssessmentResult>, (StatusCode, Json<ErrorRes>)> {
    match state.assessor.assess(&patient_id).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            let status = match &err {
                AssessError::PatientNotFound { .. } => StatusCode::NOT_FOUND,
                AssessError::InvalidBirthDate { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                AssessError::CollaboratorUnavailable { .. } => StatusCode::BAD_GATEWAY,
            };
            if status.is_server_error() {
                tracing::error!("Assessment error: {err}");
            }
            Err((
                status,
                Json(ErrorRes {
                    error: err.to_string(),
                }),
            ))
        }
    }
}
