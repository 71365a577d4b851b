use crate::domain::model::{ZoneMapResult, ZoneRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn zone_table_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Normalized, zero-padded 3-character origin codes.
    fn origins(&self) -> &[String];
    fn customer_name(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ZoneRecord>>;
    async fn transform(&self, records: Vec<ZoneRecord>) -> Result<ZoneMapResult>;
    async fn load(&self, result: ZoneMapResult) -> Result<String>;
}
