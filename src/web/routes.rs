use axum::{
    Form, Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::page::{PageView, render};
use crate::form::{FormSession, Outcome, ViewState};
use crate::translation::{ChatModel, RunConfig, SUPPORTED_LANGUAGES};

/// Shared handles injected into every request.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
    pub run_config: RunConfig,
    pub default_language: Arc<str>,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>, run_config: RunConfig, default_language: &str) -> Self {
        Self {
            model,
            run_config,
            default_language: Arc::from(default_language),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiTranslateRequest {
    pub text: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiTranslateResponse {
    pub input: String,
    pub output: String,
    pub language: String,
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate_form))
        .route("/api/translate", post(translate_api))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let session = FormSession::new();
    Html(render(&PageView {
        languages: SUPPORTED_LANGUAGES,
        selected: &state.default_language,
        text: "",
        validation: session.validation(),
        state: session.state(),
    }))
}

async fn translate_form(
    State(state): State<AppState>,
    Form(form): Form<TranslateForm>,
) -> (StatusCode, Html<String>) {
    let mut session = FormSession::new();
    let submitted = session
        .translate(
            state.model.as_ref(),
            &state.run_config,
            &form.language,
            &form.text,
        )
        .await;
    log_failure(&session);

    let status = if submitted.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let selected: &str = if SUPPORTED_LANGUAGES.contains(&form.language.as_str()) {
        form.language.as_str()
    } else {
        &state.default_language
    };

    let html = render(&PageView {
        languages: SUPPORTED_LANGUAGES,
        selected,
        text: &form.text,
        validation: session.validation(),
        state: session.state(),
    });
    (status, Html(html))
}

async fn translate_api(
    State(state): State<AppState>,
    request: Result<Json<ApiTranslateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text(), "kind": "validation" })),
            )
                .into_response();
        }
    };

    let language = request
        .language
        .unwrap_or_else(|| state.default_language.to_string());

    let mut session = FormSession::new();
    if let Err(e) = session
        .translate(
            state.model.as_ref(),
            &state.run_config,
            &language,
            &request.text,
        )
        .await
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string(), "kind": "validation" })),
        )
            .into_response();
    }
    log_failure(&session);

    match session.state() {
        ViewState::Result(Outcome::Translated { language, result }) => Json(ApiTranslateResponse {
            input: result.input.clone(),
            output: result.output.clone(),
            language: language.clone(),
        })
        .into_response(),
        ViewState::Result(Outcome::Failed { kind, message, .. }) => {
            let status = if *kind == "timeout" {
                StatusCode::GATEWAY_TIMEOUT
            } else {
                StatusCode::BAD_GATEWAY
            };
            (status, Json(json!({ "error": message, "kind": kind }))).into_response()
        }
        ViewState::Idle | ViewState::Running { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn log_failure(session: &FormSession) {
    if let ViewState::Result(Outcome::Failed { language, kind, message }) = session.state() {
        tracing::warn!(%language, kind, error = %message, "translation failed");
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
