use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting dashboard build...");

        // Extract
        let articles = self.pipeline.extract().await?;
        tracing::info!("Loaded {} articles", articles.len());

        // Transform
        let output = self.pipeline.transform(articles).await?;
        tracing::info!(
            "Derived view: {} articles after filtering, {} trend points, {} sources",
            output.view.filtered_articles.len(),
            output.view.trend.len(),
            output.view.per_source_distribution.len()
        );

        // Load
        let output_path = self.pipeline.load(output).await?;
        tracing::info!(
            "Output saved to: {} ({:?})",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
