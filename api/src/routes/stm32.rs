use actix_web::{error, post, web, Responder, Result};
use std::sync::Arc;

use crate::models::responses::StatusResponse;
use crate::services::sensor_service::{FrameIngest, SensorService};

/// Raw telemetry frame intake
///
/// Accepts the microcontroller bridge's frame bytes as-is. Unrecognized frame
/// types (heartbeats and such) are acknowledged with an `ignored` status so
/// the bridge does not retry them.
#[utoipa::path(
    post,
    path = "/api/stm32",
    request_body(content = Vec<u8>, description = "Raw telemetry frame bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Frame applied or acknowledged", body = StatusResponse),
        (status = 400, description = "Corrupted telemetry frame")
    ),
    tag = "Sensors"
)]
#[post("/api/stm32")]
pub async fn receive_stm32_data(
    service: web::Data<Arc<SensorService>>,
    body: web::Bytes,
) -> Result<impl Responder> {
    log::info!("Received frame: {}", String::from_utf8_lossy(&body).trim());

    match service.ingest_frame(&body) {
        Ok(FrameIngest::Applied) => Ok(web::Json(StatusResponse::success())),
        Ok(FrameIngest::Ignored) => {
            log::warn!("Ignoring unrecognized frame");
            Ok(web::Json(StatusResponse::ignored("Unrecognized data format")))
        }
        Err(err) => {
            log::error!("Corrupted frame: {err}");
            Err(error::ErrorBadRequest("Invalid data format"))
        }
    }
}
