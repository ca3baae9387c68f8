pub mod sensor_service;
