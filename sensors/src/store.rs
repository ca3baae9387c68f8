use crate::channels::{
    Barometer, BarometerUpdate, ChannelId, Gps, GpsUpdate, InertialUnit, InertialUnitUpdate,
    SystemHealth, SystemStatus,
};
use crate::error::StoreError;
use crate::metrics::{MetricsSource, SimulatedMetrics};
use chrono::Utc;
use serde::Serialize;
use std::sync::RwLock;
use std::time::Instant;

/// Point-in-time copy of all four channels.
///
/// Cross-channel atomicity is not promised: each channel is read under its own
/// lock, so a snapshot taken concurrently with merges to two different
/// channels may see one applied and not the other.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub inertial_unit: InertialUnit,
    pub barometer: Barometer,
    pub gps: Gps,
    pub system: SystemHealth,
}

/// Single source of truth for the current reading of every sensor channel.
///
/// One lock per writable channel: merges to the same channel are linearized,
/// merges to different channels proceed independently, and a reader sees
/// either the fully-pre-merge or fully-post-merge record, never a mix.
pub struct SensorStore {
    started: Instant,
    inertial_unit: RwLock<InertialUnit>,
    barometer: RwLock<Barometer>,
    gps: RwLock<Gps>,
    metrics: Box<dyn MetricsSource + Send + Sync>,
}

impl SensorStore {
    pub fn new() -> Self {
        Self::with_metrics(Box::new(SimulatedMetrics))
    }

    pub fn with_metrics(metrics: Box<dyn MetricsSource + Send + Sync>) -> Self {
        Self {
            started: Instant::now(),
            inertial_unit: RwLock::new(InertialUnit::default()),
            barometer: RwLock::new(Barometer::default()),
            gps: RwLock::new(Gps::default()),
            metrics,
        }
    }

    /// Returns a consistent copy of all four channels, with the system
    /// channel recomputed for this call. Never fails.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            inertial_unit: *self.inertial_unit.read().unwrap(),
            barometer: *self.barometer.read().unwrap(),
            gps: *self.gps.read().unwrap(),
            system: self.system_health(),
        }
    }

    /// Applies a partial update to the named channel. Only the fields present
    /// in `patch` are overwritten; the rest keep their previous value.
    ///
    /// The whole patch is validated against the channel's schema before any
    /// field is written, so a rejected merge leaves the record untouched.
    pub fn merge(&self, channel: &str, patch: &serde_json::Value) -> Result<(), StoreError> {
        let id = ChannelId::from_name(channel)
            .ok_or_else(|| StoreError::UnknownChannel(channel.to_string()))?;

        match id {
            ChannelId::InertialUnit => {
                let update: InertialUnitUpdate = decode_patch(id, patch)?;
                self.merge_inertial(&update);
            }
            ChannelId::Barometer => {
                let update: BarometerUpdate = decode_patch(id, patch)?;
                self.merge_barometer(&update);
            }
            ChannelId::Gps => {
                let update: GpsUpdate = decode_patch(id, patch)?;
                if update.hdop.is_some_and(|hdop| hdop < 0.0) {
                    return Err(StoreError::InvalidField {
                        channel: id.name(),
                        detail: "hdop must be non-negative".to_string(),
                    });
                }
                self.merge_gps(&update);
            }
        }

        log::debug!("Merged update into channel {}", id.name());
        Ok(())
    }

    pub fn merge_inertial(&self, update: &InertialUnitUpdate) {
        self.inertial_unit.write().unwrap().apply(update);
    }

    pub fn merge_barometer(&self, update: &BarometerUpdate) {
        self.barometer.write().unwrap().apply(update);
    }

    pub fn merge_gps(&self, update: &GpsUpdate) {
        self.gps.write().unwrap().apply(update);
    }

    fn system_health(&self) -> SystemHealth {
        let host = self.metrics.sample();
        let uptime = self.started.elapsed().as_secs_f64();

        SystemHealth {
            // One decimal, matching what operators see on the dashboard
            uptime: (uptime * 10.0).round() / 10.0,
            cpu_temp: host.cpu_temp,
            memory_usage: host.memory_usage,
            disk_usage: host.disk_usage,
            status: SystemStatus::Running,
            last_update: Utc::now(),
        }
    }
}

impl Default for SensorStore {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_patch<T: serde::de::DeserializeOwned>(
    id: ChannelId,
    patch: &serde_json::Value,
) -> Result<T, StoreError> {
    serde_json::from_value(patch.clone()).map_err(|err| StoreError::InvalidField {
        channel: id.name(),
        detail: err.to_string(),
    })
}
