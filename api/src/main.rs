use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api::config::Config;
use api::routes;
use api::services::sensor_service::SensorService;
use api::ApiDoc;
use sensors::SensorStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::load().expect("Failed to load configuration");
    let server_address = config.server_address();

    println!("Starting drone telemetry server...");
    println!("API endpoints:");
    println!("  - GET  /api/sensors - Snapshot of all sensor channels");
    println!("  - POST /api/sensors/{{channel}} - Merge a partial channel update");
    println!("  - POST /api/stm32 - Raw microcontroller telemetry frames");
    println!("  - GET  /swagger-ui/ - Swagger UI documentation");
    println!("Server address: {}", server_address);

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let service = Arc::new(SensorService::new(SensorStore::new()));

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(service.clone()))
            .service(routes::api::root)
            .service(routes::sensors::get_all_sensors)
            .service(routes::sensors::update_channel)
            .service(routes::stm32::receive_stm32_data)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_address)?
    .run()
    .await
}
