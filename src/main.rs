use anyhow::Context;
use news_insight::core::{ArticleProvider, ConfigProvider};
use news_insight::utils::error::ErrorSeverity;
use news_insight::utils::{logger, validation::Validate};
use news_insight::{
    CliConfig, DashboardConfig, DashboardEngine, DashboardPipeline, FileArticleProvider,
    LocalStorage, NewsError, StaticCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse_tracked(std::env::args_os());

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting news-insight");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = DashboardConfig::from_file(&path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;

            cli.apply_to(&mut config);

            exit_on_invalid(&config);
            tracing::info!("Dashboard: {}", config.name());
            let articles = config.input.articles.clone();
            build(config, articles).await
        }
        None => {
            exit_on_invalid(&cli);
            let articles = cli.articles.clone();
            build(cli, articles).await
        }
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Dashboard build completed successfully!");
            println!("✅ Dashboard build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Dashboard build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn exit_on_invalid<V: Validate>(config: &V) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

async fn build<C: ConfigProvider>(
    config: C,
    articles: Option<String>,
) -> Result<String, NewsError> {
    let storage = LocalStorage::new(config.output_path());
    tracing::info!("Writing dashboard files to {}", storage.base_path());

    match articles {
        Some(path) => {
            let provider = FileArticleProvider::new(LocalStorage::new("."), path)?;
            tracing::info!("Reading articles from {}", provider.path());
            execute(provider, storage, config).await
        }
        None => {
            tracing::info!("Using built-in sample articles");
            execute(StaticCatalog::new(), storage, config).await
        }
    }
}

async fn execute<P: ArticleProvider, C: ConfigProvider>(
    provider: P,
    storage: LocalStorage,
    config: C,
) -> Result<String, NewsError> {
    let pipeline = DashboardPipeline::new(provider, storage, config);
    let engine = DashboardEngine::new(pipeline);

    let session = engine.pipeline().session();
    if !session.keyword().trim().is_empty() {
        session.search();
    }

    engine.run().await
}
