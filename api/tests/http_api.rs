use actix_web::{test, web, App};
use api::routes;
use api::services::sensor_service::SensorService;
use sensors::SensorStore;
use serde_json::{json, Value};
use std::sync::Arc;

const FRAME: &[u8] = b"<SENSOR_DATA|MPU|0.1|0.2|0.3|1.1|1.2|1.3|BMP|1012.5|24.3|105.2>";

macro_rules! spawn_app {
    () => {{
        let service = web::Data::new(Arc::new(SensorService::new(SensorStore::new())));
        test::init_service(
            App::new()
                .app_data(service)
                .service(routes::api::root)
                .service(routes::sensors::get_all_sensors)
                .service(routes::sensors::update_channel)
                .service(routes::stm32::receive_stm32_data),
        )
        .await
    }};
}

#[actix_web::test]
async fn root_reports_the_service_is_running() {
    let app = spawn_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Drone Telemetry API is running");
}

#[actix_web::test]
async fn snapshot_lists_all_four_channels_and_a_timestamp() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/sensors").to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    for channel in ["inertial_unit", "barometer", "gps", "system"] {
        assert!(body["sensors"].get(channel).is_some(), "missing {channel}");
    }
    assert!(body["timestamp"].is_string());
    assert_eq!(body["sensors"]["system"]["status"], "running");
}

#[actix_web::test]
async fn structured_update_is_visible_in_the_next_snapshot() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/sensors/gps")
            .set_json(json!({"latitude": -34.6, "longitude": -58.4, "satellites": 9, "status": "fix"}))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "gps data updated");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/sensors").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["sensors"]["gps"]["latitude"], -34.6);
    assert_eq!(body["sensors"]["gps"]["satellites"], 9);
    assert_eq!(body["sensors"]["gps"]["status"], "fix");
}

#[actix_web::test]
async fn unknown_channel_is_a_404() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/sensors/thermocouple")
            .set_json(json!({"pressure": 1000.0}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn invalid_patch_is_a_400_and_leaves_the_channel_untouched() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/sensors/barometer")
            .set_json(json!({"pressure": 990.0, "presure": 1000.0}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/sensors").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["sensors"]["barometer"]["pressure"], 0.0);
}

#[actix_web::test]
async fn telemetry_frame_round_trips_into_the_snapshot() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/stm32")
            .set_payload(FRAME)
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/sensors").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["sensors"]["inertial_unit"]["accelerometer"]["x"], 0.1);
    assert_eq!(body["sensors"]["inertial_unit"]["calibrated"], true);
    assert_eq!(body["sensors"]["barometer"]["pressure"], 1012.5);
    assert_eq!(body["sensors"]["barometer"]["altitude"], 105.2);
}

#[actix_web::test]
async fn heartbeat_frame_is_acknowledged_as_ignored() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/stm32")
            .set_payload(&b"<HEARTBEAT|42>"[..])
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["message"], "Unrecognized data format");
}

#[actix_web::test]
async fn corrupted_frame_is_a_400() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/stm32")
            .set_payload(&b"<SENSOR_DATA|MPU|a|0|0|0|0|0|BMP|0|0>"[..])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Invalid data format");
}
