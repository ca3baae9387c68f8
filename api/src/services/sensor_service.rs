use sensors::{Decoded, FrameError, SensorStore, Snapshot, StoreError, TelemetryFrame};

/// What a raw frame did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameIngest {
    Applied,
    Ignored,
}

/// Application-level facade over the sensor store, shared by all handlers.
pub struct SensorService {
    store: SensorStore,
}

impl SensorService {
    pub fn new(store: SensorStore) -> Self {
        Self { store }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn update_channel(
        &self,
        channel: &str,
        patch: &serde_json::Value,
    ) -> Result<(), StoreError> {
        self.store.merge(channel, patch)
    }

    /// Decodes one raw frame and, if it is a telemetry frame, merges it into
    /// the store. Unrecognized frames are acknowledged without side effects.
    pub fn ingest_frame(&self, raw: &[u8]) -> Result<FrameIngest, FrameError> {
        match TelemetryFrame::parse(raw)? {
            Decoded::Frame(frame) => {
                frame.apply_to(&self.store);
                Ok(FrameIngest::Applied)
            }
            Decoded::Unrecognized => Ok(FrameIngest::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telemetry_frame_is_applied() {
        let service = SensorService::new(SensorStore::new());
        let outcome = service
            .ingest_frame(b"<SENSOR_DATA|MPU|0.1|0.2|0.3|1.1|1.2|1.3|BMP|1012.5|24.3|105.2>")
            .unwrap();

        assert_eq!(outcome, FrameIngest::Applied);
        assert_eq!(service.snapshot().barometer.pressure, 1012.5);
    }

    #[test]
    fn heartbeat_is_ignored_without_side_effects() {
        let service = SensorService::new(SensorStore::new());
        let before = service.snapshot();

        let outcome = service.ingest_frame(b"<HEARTBEAT|42>").unwrap();

        assert_eq!(outcome, FrameIngest::Ignored);
        assert_eq!(service.snapshot().barometer, before.barometer);
    }

    #[test]
    fn corrupted_frame_is_an_error() {
        let service = SensorService::new(SensorStore::new());
        assert!(service
            .ingest_frame(b"<SENSOR_DATA|MPU|a|0|0|0|0|0|BMP|0|0>")
            .is_err());
    }
}
