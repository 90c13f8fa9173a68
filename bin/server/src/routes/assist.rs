//! AI assist endpoints: concierge chat and the budget recommendation.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use smartstay_assist::{OFFLINE_REPLY, Recommendation, RecommendQuery};
use std::sync::Arc;

use crate::{error::ApiError, routes::required_text, state::AppState};

/// Reply body sent when the upstream chat call fails.
const AI_ERROR_REPLY: &str = "AI service error. Try again.";

/// Payload for `POST /api/ai/chat`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply envelope for `POST /api/ai/chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// `POST /api/ai/chat`
///
/// With no API key configured this replies 200 with a fixed offline
/// notice. Upstream failures come back as 500 carrying a `reply` body
/// rather than the usual `message` envelope; the chat widget renders
/// `reply` either way.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    let message = required_text(request.message.as_deref(), "Message is required")?;

    let Some(client) = &state.assist else {
        return Ok(Json(ChatResponse {
            reply: OFFLINE_REPLY.to_string(),
        })
        .into_response());
    };

    match client.reply(&message).await {
        Ok(reply) => Ok(Json(ChatResponse { reply }).into_response()),
        Err(report) => {
            tracing::error!(error = %report, "assistant chat failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse {
                    reply: AI_ERROR_REPLY.to_string(),
                }),
            )
                .into_response())
        }
    }
}

/// `POST /api/ai/recommend`
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(query): Json<RecommendQuery>,
) -> Result<Json<Recommendation>, ApiError> {
    let hotels = state.hotels.list().await?;
    let recommendation = smartstay_assist::recommend(&hotels, &query)
        .ok_or_else(|| ApiError::not_found("No hotels available"))?;
    Ok(Json(recommendation))
}
