use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::analysis::{AnalysisPipeline, AnalysisRequest, ValidationError};
use crate::completion::CompletionProvider;
use crate::providers::document::{DocumentExtractor, UploadedDocument};

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Clone)]
struct AppState {
    pipeline: Arc<AnalysisPipeline>,
    extractor: Arc<DocumentExtractor>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    report: String,
}

#[derive(Serialize)]
struct ApiResponse {
    status: String,
}

pub fn create_api(provider: impl CompletionProvider + Send + Sync + 'static) -> Router {
    let state = AppState {
        pipeline: Arc::new(AnalysisPipeline::new(provider)),
        extractor: Arc::new(DocumentExtractor::new()),
    };

    // Fully permissive CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> Json<ApiResponse> {
    Json(ApiResponse {
        status: "Server is running and healthy".to_string(),
    })
}

fn reject(status: StatusCode, message: String) -> Response {
    (status, Json(ApiResponse { status: message })).into_response()
}

/// One interaction: collect the multipart parts, extract the resume text,
/// validate, then run the pipeline. Either the full report comes back or a
/// single error message does; partial results are never returned.
async fn analyze_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut resume: Option<UploadedDocument> = None;
    let mut job_description = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return reject(StatusCode::BAD_REQUEST, format!("Invalid upload: {}", e)),
        };

        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) if !file_name.is_empty() && !bytes.is_empty() => {
                        resume = Some(UploadedDocument::new(file_name, bytes.to_vec()));
                    }
                    Ok(_) => {}
                    Err(e) => {
                        return reject(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read uploaded file: {}", e),
                        )
                    }
                }
            }
            "job_description" => match field.text().await {
                Ok(text) => job_description = text,
                Err(e) => {
                    return reject(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read job description: {}", e),
                    )
                }
            },
            _ => {}
        }
    }

    let Some(resume) = resume else {
        return reject(
            StatusCode::BAD_REQUEST,
            ValidationError::MissingResume.to_string(),
        );
    };

    info!("Analyzing uploaded resume: {}", resume.name);

    let resume_text = match state.extractor.extract(&resume) {
        Ok(text) => text,
        Err(e) => return reject(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let request = match AnalysisRequest::new(resume_text, job_description) {
        Ok(request) => request,
        Err(e) => return reject(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.pipeline.analyze(&request).await {
        Ok(report) => Json(AnalyzeResponse { report }).into_response(),
        Err(e) => {
            error!("Analysis failed: {}", e);
            reject(StatusCode::BAD_GATEWAY, format!("Analysis failed: {}", e))
        }
    }
}
