pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod session;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::DashboardConfig;

pub use adapters::{
    catalog::StaticCatalog, file_source::FileArticleProvider, storage::LocalStorage,
};
pub use crate::core::{deriver::ViewStateDeriver, etl::DashboardEngine, pipeline::DashboardPipeline};
pub use domain::model::{
    Article, DerivedView, Sentiment, SentimentCategory, SentimentDistribution, SortOption,
    Source, SourceSentiment, TrendPoint,
};
pub use session::SessionState;
pub use utils::error::{NewsError, Result};
