//! HTTP transport for the drone telemetry service: actix-web handlers over
//! the `sensors` store, with OpenAPI documentation served by Swagger UI.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::root,
        routes::sensors::get_all_sensors,
        routes::sensors::update_channel,
        routes::stm32::receive_stm32_data
    ),
    components(schemas(
        models::responses::MessageResponse,
        models::responses::StatusResponse,
        models::responses::SensorsResponse
    )),
    tags(
        (name = "API", description = "Service status endpoints"),
        (name = "Sensors", description = "Sensor channel reads and updates")
    ),
    info(
        title = "Drone Telemetry API",
        version = "1.0.0",
        description = "Latest-value telemetry for the flight payload's onboard sensors"
    )
)]
pub struct ApiDoc;
