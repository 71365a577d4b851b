use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through extract -> transform -> load with per-phase
/// logging and optional system stats.
pub struct ZoneMapEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ZoneMapEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading zone table...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Loaded {} zone records", records.len());
        self.monitor.log_stats("extract");

        tracing::info!("Resolving minimum zones...");
        let result = self.pipeline.transform(records).await?;
        tracing::info!("Resolved {} destination ZIP3s", result.entries.len());
        self.monitor.log_stats("transform");

        tracing::info!("Writing zone data...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
