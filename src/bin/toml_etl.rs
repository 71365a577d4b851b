use zonemap_etl::domain::ports::ConfigProvider;
use zonemap_etl::utils::{logger, validation::Validate};
use zonemap_etl::{LocalStorage, TomlConfig, ZoneMapEngine, ZoneMapPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "zonemap.toml".to_string());

    let config = TomlConfig::from_file(&config_path)?;
    logger::init_cli_logger(config.verbose());

    tracing::info!("Starting zonemap-etl with config: {}", config_path);
    config.validate()?;

    let monitor_enabled = config.monitor();
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ZoneMapPipeline::new(storage, config);
    let engine = ZoneMapEngine::new_with_monitoring(pipeline, monitor_enabled);

    let output_path = engine.run().await?;
    println!("✅ Zone map data ready");
    println!("📁 Output saved to: {}", output_path);

    Ok(())
}
