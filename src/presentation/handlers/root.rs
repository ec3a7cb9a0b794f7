use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the MedBrief file processing API";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

pub async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
