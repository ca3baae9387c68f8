use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard atmosphere pressure at sea level, in hPa.
pub const STANDARD_SEA_LEVEL_PRESSURE: f64 = 1013.25;

/// One independently updatable sensor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    InertialUnit,
    Barometer,
    Gps,
}

impl ChannelId {
    /// Resolves a public channel name. `system` is recomputed on every
    /// snapshot and is not addressable for writes, so it resolves to `None`
    /// like any other unknown name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "inertial_unit" => Some(Self::InertialUnit),
            "barometer" => Some(Self::Barometer),
            "gps" => Some(Self::Gps),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InertialUnit => "inertial_unit",
            Self::Barometer => "barometer",
            Self::Gps => "gps",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Component-wise partial update for a `Vec3`. Absent components keep their
/// previous value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vec3Update {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Vec3 {
    fn apply(&mut self, update: &Vec3Update) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(z) = update.z {
            self.z = z;
        }
    }
}

impl From<Vec3> for Vec3Update {
    fn from(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorStatus {
    #[default]
    Idle,
    Active,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpsStatus {
    #[default]
    NoFix,
    Fix,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    #[default]
    Idle,
    Running,
}

/// IMU record. The magnetometer is carried for completeness but is never
/// populated by the microcontroller wire frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InertialUnit {
    pub accelerometer: Vec3,
    pub gyroscope: Vec3,
    pub magnetometer: Vec3,
    pub temperature: f64,
    pub calibrated: bool,
    pub status: SensorStatus,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InertialUnitUpdate {
    pub accelerometer: Option<Vec3Update>,
    pub gyroscope: Option<Vec3Update>,
    pub magnetometer: Option<Vec3Update>,
    pub temperature: Option<f64>,
    pub calibrated: Option<bool>,
    pub status: Option<SensorStatus>,
}

impl InertialUnit {
    pub(crate) fn apply(&mut self, update: &InertialUnitUpdate) {
        if let Some(accelerometer) = &update.accelerometer {
            self.accelerometer.apply(accelerometer);
        }
        if let Some(gyroscope) = &update.gyroscope {
            self.gyroscope.apply(gyroscope);
        }
        if let Some(magnetometer) = &update.magnetometer {
            self.magnetometer.apply(magnetometer);
        }
        if let Some(temperature) = update.temperature {
            self.temperature = temperature;
        }
        if let Some(calibrated) = update.calibrated {
            self.calibrated = calibrated;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barometer {
    pub pressure: f64,
    pub temperature: f64,
    pub altitude: f64,
    pub sea_level_pressure: f64,
    pub calibrated: bool,
    pub status: SensorStatus,
}

impl Default for Barometer {
    fn default() -> Self {
        Self {
            pressure: 0.0,
            temperature: 0.0,
            altitude: 0.0,
            sea_level_pressure: STANDARD_SEA_LEVEL_PRESSURE,
            calibrated: false,
            status: SensorStatus::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarometerUpdate {
    pub pressure: Option<f64>,
    pub temperature: Option<f64>,
    pub altitude: Option<f64>,
    pub sea_level_pressure: Option<f64>,
    pub calibrated: Option<bool>,
    pub status: Option<SensorStatus>,
}

impl Barometer {
    pub(crate) fn apply(&mut self, update: &BarometerUpdate) {
        if let Some(pressure) = update.pressure {
            self.pressure = pressure;
        }
        if let Some(temperature) = update.temperature {
            self.temperature = temperature;
        }
        if let Some(altitude) = update.altitude {
            self.altitude = altitude;
        }
        if let Some(sea_level_pressure) = update.sea_level_pressure {
            self.sea_level_pressure = sea_level_pressure;
        }
        if let Some(calibrated) = update.calibrated {
            self.calibrated = calibrated;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// GPS record. Updatable through the structured path only; the current wire
/// frame carries no GPS fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Gps {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f64,
    pub satellites: u32,
    pub hdop: f64,
    pub status: GpsStatus,
    pub calibrated: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GpsUpdate {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub speed: Option<f64>,
    pub satellites: Option<u32>,
    pub hdop: Option<f64>,
    pub status: Option<GpsStatus>,
    pub calibrated: Option<bool>,
}

impl Gps {
    pub(crate) fn apply(&mut self, update: &GpsUpdate) {
        if let Some(latitude) = update.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            self.longitude = longitude;
        }
        if let Some(altitude) = update.altitude {
            self.altitude = altitude;
        }
        if let Some(speed) = update.speed {
            self.speed = speed;
        }
        if let Some(satellites) = update.satellites {
            self.satellites = satellites;
        }
        if let Some(hdop) = update.hdop {
            self.hdop = hdop;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(calibrated) = update.calibrated {
            self.calibrated = calibrated;
        }
    }
}

/// Host health record, recomputed from scratch on every snapshot. Not
/// addressable for writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth {
    pub uptime: f64,
    pub cpu_temp: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub status: SystemStatus,
    pub last_update: DateTime<Utc>,
}

impl Default for SystemHealth {
    fn default() -> Self {
        Self {
            uptime: 0.0,
            cpu_temp: 0.0,
            memory_usage: 0.0,
            disk_usage: 0.0,
            status: SystemStatus::Idle,
            last_update: Utc::now(),
        }
    }
}
