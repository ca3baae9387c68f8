use actix_web::{error, get, post, web, Responder, Result};
use chrono::Utc;
use sensors::StoreError;
use std::sync::Arc;

use crate::models::responses::{SensorsResponse, StatusResponse};
use crate::services::sensor_service::SensorService;

/// Latest reading of every sensor channel
#[utoipa::path(
    get,
    path = "/api/sensors",
    responses(
        (status = 200, description = "Snapshot of all channels", body = SensorsResponse)
    ),
    tag = "Sensors"
)]
#[get("/api/sensors")]
pub async fn get_all_sensors(service: web::Data<Arc<SensorService>>) -> Result<impl Responder> {
    let response = SensorsResponse {
        sensors: service.snapshot(),
        timestamp: Utc::now(),
    };
    Ok(web::Json(response))
}

/// Partial update of one sensor channel
///
/// Only the fields present in the body are overwritten; the rest of the
/// channel record keeps its previous value.
#[utoipa::path(
    post,
    path = "/api/sensors/{channel}",
    params(
        ("channel" = String, Path, description = "inertial_unit, barometer or gps")
    ),
    responses(
        (status = 200, description = "Update merged", body = StatusResponse),
        (status = 400, description = "Patch failed channel validation"),
        (status = 404, description = "Unknown channel")
    ),
    tag = "Sensors"
)]
#[post("/api/sensors/{channel}")]
pub async fn update_channel(
    service: web::Data<Arc<SensorService>>,
    path: web::Path<String>,
    patch: web::Json<serde_json::Value>,
) -> Result<impl Responder> {
    let channel = path.into_inner();

    match service.update_channel(&channel, &patch) {
        Ok(()) => Ok(web::Json(StatusResponse::success_with(format!(
            "{channel} data updated"
        )))),
        Err(err @ StoreError::UnknownChannel(_)) => {
            log::error!("Rejected update: {err}");
            Err(error::ErrorNotFound(err.to_string()))
        }
        Err(err @ StoreError::InvalidField { .. }) => {
            log::error!("Rejected update: {err}");
            Err(error::ErrorBadRequest(err.to_string()))
        }
    }
}
