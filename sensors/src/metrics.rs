/// One sample of host health readings.
#[derive(Debug, Clone, Copy)]
pub struct HostMetrics {
    pub cpu_temp: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
}

/// Source of host health readings for the system channel.
pub trait MetricsSource {
    fn sample(&self) -> HostMetrics;
}

/// Fixed readings standing in for real host instrumentation.
pub struct SimulatedMetrics;

impl MetricsSource for SimulatedMetrics {
    fn sample(&self) -> HostMetrics {
        HostMetrics {
            cpu_temp: 45.0,
            memory_usage: 30.5,
            disk_usage: 15.2,
        }
    }
}
