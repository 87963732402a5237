//! Public routes serving DID documents and certificates.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use didweb_core::DID_DOCUMENT_FILE;

use super::{AppJson, AppState, PEM_CONTENT_TYPE};
use crate::error::{Error, Result};
use crate::store::ParticipantStore;

// A participant's DID document (`did.json`) or one of its certificates
// (`<certificateId>.pem`).
pub async fn participant_file<S: ParticipantStore>(
    State(state): State<AppState<S>>, Path((participant_id, file)): Path<(String, String)>,
) -> Result<Response> {
    if file == DID_DOCUMENT_FILE {
        tracing::debug!("serving DID document of participant {participant_id}");
        let document = state.documents.participant_document(&participant_id).await?;
        return Ok(AppJson(document).into_response());
    }

    let Some(certificate_id) = file.strip_suffix(".pem") else {
        return Err(Error::CertificateNotFound(format!("Resource {file} could not be found.")));
    };
    tracing::debug!("serving certificate {certificate_id} of participant {participant_id}");
    let pem = state.certificates.participant_certificate(&participant_id, certificate_id).await?;
    Ok(pem_response(pem))
}

pub async fn common_document<S: ParticipantStore>(
    State(state): State<AppState<S>>,
) -> Result<Response> {
    let document = state.documents.common_document()?;
    Ok(AppJson(document).into_response())
}

pub async fn common_certificate<S: ParticipantStore>(
    State(state): State<AppState<S>>,
) -> Result<Response> {
    Ok(pem_response(state.certificates.common_certificate()?))
}

fn pem_response(pem: String) -> Response {
    ([(header::CONTENT_TYPE, PEM_CONTENT_TYPE)], pem).into_response()
}
