use crate::domain::model::{Article, DashboardOutput};
use crate::session::SessionState;
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

/// 文章資料的提供端 (內建資料、檔案，未來可能是搜尋結果)
pub trait ArticleProvider: Send + Sync {
    fn articles(&self) -> impl std::future::Future<Output = Result<Vec<Article>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn session(&self) -> SessionState;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Article>>;
    async fn transform(&self, articles: Vec<Article>) -> Result<DashboardOutput>;
    async fn load(&self, output: DashboardOutput) -> Result<String>;
}
