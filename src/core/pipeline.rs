use crate::core::deriver::ViewStateDeriver;
use crate::domain::model::{
    Article, DashboardOutput, DerivedView, DistributionSlice, SortOption,
};
use crate::domain::ports::{ArticleProvider, ConfigProvider, Pipeline, Storage};
use crate::session::SessionState;
use crate::utils::error::{NewsError, Result};
use serde::Serialize;

pub const ARTICLES_CSV: &str = "articles.csv";
pub const TREND_CSV: &str = "sentiment_trend.csv";
pub const SOURCE_CSV: &str = "source_sentiment.csv";
pub const DASHBOARD_JSON: &str = "dashboard.json";

#[derive(Serialize)]
struct ArticleCsvRow<'a> {
    title: &'a str,
    source: &'a str,
    summary: &'a str,
    url: &'a str,
    score: u8,
    sentiment: String,
    date: &'a str,
}

impl<'a> From<&'a Article> for ArticleCsvRow<'a> {
    fn from(article: &'a Article) -> Self {
        let sentiment = article.sentiment();
        Self {
            title: article.title(),
            source: article.source(),
            summary: article.summary(),
            url: article.url(),
            score: sentiment.score,
            sentiment: sentiment.category.to_string(),
            date: article.date(),
        }
    }
}

#[derive(Serialize)]
struct DashboardJson<'a> {
    sort: SortOption,
    keyword: &'a str,
    sources: Vec<String>,
    view: &'a DerivedView,
    distribution_slices: Vec<DistributionSlice>,
    max_source_count: usize,
}

const ARTICLE_COLUMNS: [&str; 7] = [
    "title",
    "source",
    "summary",
    "url",
    "score",
    "sentiment",
    "date",
];
const TREND_COLUMNS: [&str; 3] = ["date", "timestamp", "average_score"];
const SOURCE_COLUMNS: [&str; 4] = ["source", "positive", "negative", "neutral"];

/// 標頭列一律寫出，空的視圖也保留欄位名稱
fn render_csv<T: Serialize>(
    columns: &[&str],
    rows: impl IntoIterator<Item = T>,
) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| NewsError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| NewsError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

/// 文章來源 → 衍生視圖 → 匯出檔案
pub struct DashboardPipeline<P: ArticleProvider, S: Storage, C: ConfigProvider> {
    provider: P,
    storage: S,
    config: C,
    session: SessionState,
}

impl<P: ArticleProvider, S: Storage, C: ConfigProvider> DashboardPipeline<P, S, C> {
    pub fn new(provider: P, storage: S, config: C) -> Self {
        let session = config.session();
        Self {
            provider,
            storage,
            config,
            session,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }
}

#[async_trait::async_trait]
impl<P: ArticleProvider, S: Storage, C: ConfigProvider> Pipeline for DashboardPipeline<P, S, C> {
    async fn extract(&self) -> Result<Vec<Article>> {
        let articles = self.provider.articles().await?;

        let sources = self.session.sources();
        for article in &articles {
            if !sources.iter().any(|source| source.name == article.source()) {
                tracing::warn!(
                    "Article '{}' has unknown source '{}' and will be filtered out",
                    article.title(),
                    article.source()
                );
            }
        }

        Ok(articles)
    }

    async fn transform(&self, articles: Vec<Article>) -> Result<DashboardOutput> {
        let view = ViewStateDeriver::new(&articles).derive_for(&self.session);

        let articles_csv = render_csv(
            &ARTICLE_COLUMNS,
            view.sorted_articles.iter().map(ArticleCsvRow::from),
        )?;
        let trend_csv = render_csv(&TREND_COLUMNS, view.trend.iter())?;
        let source_csv = render_csv(&SOURCE_COLUMNS, view.per_source_distribution.iter())?;

        Ok(DashboardOutput {
            view,
            articles_csv,
            trend_csv,
            source_csv,
        })
    }

    async fn load(&self, output: DashboardOutput) -> Result<String> {
        let mut written = Vec::new();

        if self.wants("csv") {
            self.storage
                .write_file(ARTICLES_CSV, output.articles_csv.as_bytes())
                .await?;
            self.storage
                .write_file(TREND_CSV, output.trend_csv.as_bytes())
                .await?;
            self.storage
                .write_file(SOURCE_CSV, output.source_csv.as_bytes())
                .await?;
            written.extend([ARTICLES_CSV, TREND_CSV, SOURCE_CSV]);
        }

        if self.wants("json") {
            let document = DashboardJson {
                sort: self.session.sort_option(),
                keyword: self.session.keyword(),
                sources: self.session.enabled_source_names(),
                view: &output.view,
                distribution_slices: output.view.distribution.slices(),
                max_source_count: output.view.max_source_count(),
            };
            let json_data = serde_json::to_string_pretty(&document)?;
            self.storage
                .write_file(DASHBOARD_JSON, json_data.as_bytes())
                .await?;
            written.push(DASHBOARD_JSON);
        }

        tracing::debug!("Wrote {} files: {:?}", written.len(), written);
        Ok(self.config.output_path().to_string())
    }
}
