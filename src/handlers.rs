//! # HTTP Handlers
//!
//! The axum router exposing public DID document and certificate routes and
//! the internal management routes.

mod internal;
mod public;

use std::sync::Arc;

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use didweb_core::DidWeb;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::certificate::CertificateLookup;
use crate::common::CommonIdentity;
use crate::config::Settings;
use crate::document::DocumentAssembler;
use crate::error::Error;
use crate::management::Registrar;
use crate::store::ParticipantStore;

/// Content type of served certificates.
pub const PEM_CONTENT_TYPE: &str = "application/x-x509-ca-cert";

/// Shared state of the HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState<S> {
    documents: DocumentAssembler<S>,
    certificates: CertificateLookup<S>,
    registrar: Registrar<S>,
}

impl<S: ParticipantStore> AppState<S> {
    /// Create handler state for the domain and common identity.
    pub fn new(store: S, did_web: DidWeb, common: Arc<CommonIdentity>) -> Self {
        let common_vm_id = common.verification_method().map(|vm| vm.id.clone());
        Self {
            documents: DocumentAssembler::new(store.clone(), did_web.clone(), Arc::clone(&common)),
            certificates: CertificateLookup::new(store.clone(), did_web.clone(), common),
            registrar: Registrar::new(store, did_web, common_vm_id),
        }
    }

    /// Create handler state from settings, loading the common certificate.
    ///
    /// # Errors
    ///
    /// Returns an error if the common certificate cannot be loaded.
    pub fn from_settings(settings: &Settings, store: S) -> anyhow::Result<Self> {
        let did_web = DidWeb::new(&settings.did_web_domain);
        let common = CommonIdentity::load(&did_web, &settings.common_verification_method)?;
        Ok(Self::new(store, did_web, Arc::new(common)))
    }
}

/// Build the service router.
pub fn router<S: ParticipantStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/participant/{participant_id}/{file}", get(public::participant_file::<S>))
        .route("/.well-known/did.json", get(public::common_document::<S>))
        .route("/.well-known/cert.ss.pem", get(public::common_certificate::<S>))
        .route(
            "/internal/didweb",
            post(internal::generate::<S>).patch(internal::update::<S>),
        )
        .route("/internal/didweb/{did}", delete(internal::remove::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON extractor and response rejecting malformed bodies with the service's
/// error response.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::RequestArgument(rejection.body_text())
    }
}

/// Body of every error response.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// When the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Summary of the kind of error.
    pub message: String,

    /// Description of the failure.
    pub details: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::RequestArgument(_) => StatusCode::BAD_REQUEST,
            Self::ParticipantNotFound(_) | Self::CertificateNotFound(_) => StatusCode::NOT_FOUND,
            Self::DidDocumentGeneration { .. } | Self::Store(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        tracing::error!(error = ?self, "{status}: {}", self.summary());

        let body = ErrorResponse {
            timestamp: Utc::now(),
            message: self.summary().to_string(),
            details: self.details(),
        };
        (status, Json(body)).into_response()
    }
}
