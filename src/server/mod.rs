//! HTTP boundary: a liveness probe and the multipart upload endpoint.
//!
//! The caller always receives exactly one JSON outcome per request. Party
//! rows created by an attempt that later failed or was ignored are never
//! mentioned in the response.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde_json::json;

use crate::import::Importer;

/// Routes: `GET /` liveness, `POST /upload` multipart document upload.
pub fn router(importer: Arc<Importer>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/upload", post(upload))
        .with_state(importer)
}

async fn home() -> Json<serde_json::Value> {
    Json(json!({ "message": "Fatture importer attivo" }))
}

async fn upload(State(importer): State<Arc<Importer>>, mut multipart: Multipart) -> Response {
    let mut file: Option<(String, Vec<u8>)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("file") {
                    let filename = field.file_name().unwrap_or("upload.xml").to_string();
                    match field.bytes().await {
                        Ok(bytes) => {
                            file = Some((filename, bytes.to_vec()));
                            break;
                        }
                        Err(e) => {
                            return error_response(
                                StatusCode::BAD_REQUEST,
                                &format!("lettura del file fallita: {e}"),
                            );
                        }
                    }
                }
            }
            Ok(None) => break,
            // A broken multipart body is its own defect, not a missing field.
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("corpo multipart non valido: {e}"),
                );
            }
        }
    }

    let Some((filename, bytes)) = file else {
        return error_response(StatusCode::BAD_REQUEST, "nessun file ricevuto");
    };

    match importer.import(&filename, &bytes).await {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({
                "message": report.message,
                "filename": filename,
                "status": report.status,
            })),
        )
            .into_response(),
        Err(err) => {
            let status = if err.is_document_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            error_response(status, &err.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
