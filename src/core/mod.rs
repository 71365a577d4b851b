pub mod etl;
pub mod expand;
pub mod pipeline;
pub mod resolve;

pub use crate::domain::model::{ExpandedEntry, ResolvedZoneEntry, ZoneMapResult, ZoneRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
