use crate::channels::{BarometerUpdate, InertialUnitUpdate, SensorStatus, Vec3};
use crate::error::FrameError;
use crate::store::SensorStore;

// <SENSOR_DATA|MPU|ax|ay|az|gx|gy|gz|BMP|pressure|temperature[|altitude]>
const HEADER_MARKER: &str = "SENSOR_DATA";
const IMU_MARKER: &str = "MPU";
const BARO_MARKER: &str = "BMP";
const MIN_TOKENS: usize = 11;

/// Outcome of decoding one raw telemetry frame.
///
/// `Unrecognized` is a soft outcome, not an error: the bridge also emits
/// heartbeats and other frame types, and those must be acknowledged without
/// being treated as a transport failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Frame(TelemetryFrame),
    Unrecognized,
}

/// One decoded microcontroller telemetry frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryFrame {
    pub accelerometer: Vec3,
    pub gyroscope: Vec3,
    pub pressure: f64,
    pub temperature: f64,
    pub altitude: f64,
}

impl TelemetryFrame {
    /// Decodes one raw frame.
    ///
    /// Anything that does not match the `<...>` marker shape (including
    /// non-UTF-8 bodies) is `Unrecognized`. A frame that matches the shape
    /// but has a non-numeric payload token is `Malformed`, so the caller can
    /// flag a corrupted transmission instead of silently dropping it.
    pub fn parse(raw: &[u8]) -> Result<Decoded, FrameError> {
        let Ok(text) = std::str::from_utf8(raw) else {
            return Ok(Decoded::Unrecognized);
        };
        let text = text.trim();

        if !text.starts_with('<') || !text.ends_with('>') || text.len() < 2 {
            return Ok(Decoded::Unrecognized);
        }

        let tokens: Vec<&str> = text[1..text.len() - 1].split('|').collect();
        if tokens.len() < MIN_TOKENS
            || tokens[0] != HEADER_MARKER
            || tokens[1] != IMU_MARKER
            || tokens[8] != BARO_MARKER
        {
            return Ok(Decoded::Unrecognized);
        }

        let accelerometer = Vec3 {
            x: number(&tokens, 2)?,
            y: number(&tokens, 3)?,
            z: number(&tokens, 4)?,
        };
        let gyroscope = Vec3 {
            x: number(&tokens, 5)?,
            y: number(&tokens, 6)?,
            z: number(&tokens, 7)?,
        };
        let pressure = number(&tokens, 9)?;
        let temperature = number(&tokens, 10)?;
        let altitude = if tokens.len() > 11 {
            number(&tokens, 11)?
        } else {
            0.0
        };

        Ok(Decoded::Frame(TelemetryFrame {
            accelerometer,
            gyroscope,
            pressure,
            temperature,
            altitude,
        }))
    }

    /// Applies this frame to the store: IMU accelerometer/gyroscope and the
    /// barometer readings, both marked calibrated and active. The frame
    /// carries no magnetometer or GPS fields, so those records are untouched.
    pub fn apply_to(&self, store: &SensorStore) {
        store.merge_inertial(&InertialUnitUpdate {
            accelerometer: Some(self.accelerometer.into()),
            gyroscope: Some(self.gyroscope.into()),
            calibrated: Some(true),
            status: Some(SensorStatus::Active),
            ..Default::default()
        });
        store.merge_barometer(&BarometerUpdate {
            pressure: Some(self.pressure),
            temperature: Some(self.temperature),
            altitude: Some(self.altitude),
            calibrated: Some(true),
            status: Some(SensorStatus::Active),
            ..Default::default()
        });
    }
}

fn number(tokens: &[&str], idx: usize) -> Result<f64, FrameError> {
    let token = tokens
        .get(idx)
        .ok_or_else(|| FrameError::Malformed(format!("missing token at index {idx}")))?;
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| FrameError::Malformed(format!("expected a number at index {idx}, got `{token}`")))
}
