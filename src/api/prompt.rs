use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agent::RoutedResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

// Body shape shared by every prompt outcome. `data` is only present when a
// tool actually executed.
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub message: String,
    pub summary: String,
    pub prompt: String,
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

// The handler function for the POST /api/prompt endpoint.
pub async fn prompt_handler(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> impl IntoResponse {
    let Some(prompt) = request.prompt.filter(|p| !p.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(PromptResponse {
                message: "Prompt is required".to_string(),
                summary: String::new(),
                prompt: String::new(),
                status: false,
                data: None,
            }),
        );
    };

    info!("user prompt: {}", prompt);

    let response = match state.agent.handle_prompt(&prompt).await {
        RoutedResult::Diagnostic(message) => PromptResponse {
            message,
            summary: String::new(),
            prompt,
            status: true,
            data: None,
        },
        RoutedResult::Executed { data, summary } => PromptResponse {
            message: data.clone(),
            summary,
            prompt,
            status: true,
            data: Some(data),
        },
    };

    (StatusCode::OK, Json(response))
}
