pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    etl::ZoneMapEngine,
    expand::expand_ranges,
    pipeline::ZoneMapPipeline,
    resolve::{resolve_min_zones, resolve_zones},
};
pub use crate::domain::model::{ExpandedEntry, ResolvedZoneEntry, ZoneRecord};
pub use crate::utils::error::{Result, ZoneEtlError};
