use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use chrono::{SecondsFormat, Utc};

use std::sync::Arc;

use crate::{
    config::Config,
    dto::{HealthResponse, SendEmailRequest, SendEmailResponse},
    extract::JsonOrForm,
    service::EmailService,
};

const EMAIL_REQUIRED: &str = "Email address is required";
const DEFAULT_NAME: &str = "there";
const SERVICE_NAME: &str = "Mail Service";

pub struct AppState {
    pub config: Config,
    pub service: EmailService,
}

#[debug_handler]
pub async fn send_email(
    State(state): State<Arc<AppState>>,
    JsonOrForm(payload): JsonOrForm<SendEmailRequest>,
) -> Response {
    let Some(recipient) = payload.recipient_email.filter(|email| !email.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(SendEmailResponse::failed(EMAIL_REQUIRED, None)),
        )
            .into_response();
    };

    let name = payload
        .recipient_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    match state.service.send_email(&recipient, &name).await {
        Ok(message_id) => {
            tracing::info!("Email sent successfully: {message_id}");
            (StatusCode::OK, Json(SendEmailResponse::sent(message_id))).into_response()
        }
        Err(e) => {
            tracing::error!("Error sending email: {e}");
            let detail = state
                .config
                .exposes_error_detail()
                .then(|| e.detail().to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendEmailResponse::failed(e.user_message(), detail)),
            )
                .into_response()
        }
    }
}

#[debug_handler]
pub async fn health_check() -> Response {
    let health = HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME.to_string(),
    };
    (StatusCode::OK, Json(health)).into_response()
}
