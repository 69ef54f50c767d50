//! Webhook endpoint receiving chat updates from the external transport

use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    bot::{ChatUpdate, Reply},
    error::{AppError, AppResult},
    AppState,
};

pub const WEBHOOK_SECRET_HEADER: &str = "x-webhook-secret";

/// Replies produced for one chat update
#[derive(Serialize, ToSchema)]
pub struct WebhookResponse {
    pub replies: Vec<Reply>,
}

/// Receive one chat update and return the replies to render
#[utoipa::path(
    post,
    path = "/webhook",
    tag = "webhook",
    request_body = ChatUpdate,
    responses(
        (status = 200, description = "Replies for the transport to render", body = WebhookResponse),
        (status = 401, description = "Webhook secret missing or wrong", body = crate::error::ErrorResponse)
    )
)]
pub async fn receive_update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<ChatUpdate>,
) -> AppResult<Json<WebhookResponse>> {
    if let Some(secret) = &state.config.bot.webhook_secret {
        let provided = headers
            .get(WEBHOOK_SECRET_HEADER)
            .and_then(|value| value.to_str().ok());
        if provided != Some(secret.as_str()) {
            return Err(AppError::Authentication(
                "Missing or invalid webhook secret".to_string(),
            ));
        }
    }

    tracing::debug!(chat_id = update.chat_id, "Handling chat update");
    let replies = state.gateway.handle(&update).await?;
    Ok(Json(WebhookResponse { replies }))
}
