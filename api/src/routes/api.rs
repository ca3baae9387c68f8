use actix_web::{get, Responder, Result};

use crate::models::responses::MessageResponse;

/// Liveness endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    ),
    tag = "API"
)]
#[get("/")]
pub async fn root() -> Result<impl Responder> {
    let response = MessageResponse {
        message: "Drone Telemetry API is running".to_string(),
    };
    Ok(actix_web::web::Json(response))
}
