//! Latest-value cache for the flight payload's onboard sensors and the
//! decoder for the microcontroller telemetry frame that feeds it.
//!
//! The store is a pass-through cache, not a time series: each channel holds
//! its most recent reading and is mutated only through partial merges.

pub mod channels;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod store;

pub use channels::{
    Barometer, ChannelId, Gps, GpsStatus, InertialUnit, SensorStatus, SystemHealth, SystemStatus,
    Vec3,
};
pub use error::{FrameError, StoreError};
pub use frame::{Decoded, TelemetryFrame};
pub use store::{SensorStore, Snapshot};
