#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    normalize_origin_list, validate_non_empty_string, validate_origin_list, validate_path,
    Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "zonemap-etl")]
#[command(about = "Builds a minimum-zone destination table from a master zone file")]
pub struct CliConfig {
    /// Master zone table CSV (Set_ID,Min_Zip_Int,Max_Zip_Int,Zone)
    #[arg(long, default_value = "zones.csv")]
    pub zone_table: String,

    /// 3-digit origin ZIPs, comma separated
    #[arg(long, value_delimiter = ',')]
    pub origins: Vec<String>,

    /// Customer name used to label the run
    #[arg(long)]
    pub customer: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Pad and dedupe the origin list before validation, exactly as the
    /// interactive tool cleans its text input.
    pub fn normalize_origins(&mut self) {
        self.origins = normalize_origin_list(&self.origins);
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("zone_table", &self.zone_table)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("customer", &self.customer)?;
        validate_origin_list("origins", &self.origins)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn zone_table_path(&self) -> &str {
        &self.zone_table
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn origins(&self) -> &[String] {
        &self.origins
    }

    fn customer_name(&self) -> &str {
        &self.customer
    }
}
