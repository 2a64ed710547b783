use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Prompts known to route cleanly with either matching strategy.
pub const SAMPLE_PROMPTS: &[&str] = &[
    "What's in my wallet 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
    "price of 0x6982508145454Ce325dDbE47a25d4ec3d2311933 on ethereum",
    "what wallet owns vitalik.eth",
    "trending tokens on eth",
    "net worth of 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
    "nft trades for 0xBC4CA0EdA7647A8aB7C2061c2E118A18a936f13D",
];

pub async fn samples_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Sample prompts",
        "status": true,
        "data": SAMPLE_PROMPTS,
    }))
}
