pub mod aggregate;
pub mod deriver;
pub mod etl;
pub mod filter;
pub mod pipeline;
pub mod sort;

pub use crate::domain::model::{Article, DashboardOutput, DerivedView};
pub use crate::domain::ports::{ArticleProvider, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
