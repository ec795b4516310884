use crate::utils::error::{NewsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// 圖表輸出的固定順序
    pub const ALL: [SentimentCategory; 3] = [
        SentimentCategory::Positive,
        SentimentCategory::Negative,
        SentimentCategory::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::Neutral => "Neutral",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "#10B981",
            SentimentCategory::Negative => "#EF4444",
            SentimentCategory::Neutral => "#FBBF24",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "😊",
            SentimentCategory::Negative => "😟",
            SentimentCategory::Neutral => "😐",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentCategory::Positive => write!(f, "positive"),
            SentimentCategory::Negative => write!(f, "negative"),
            SentimentCategory::Neutral => write!(f, "neutral"),
        }
    }
}

/// Score and category come from the data source as-is; no mapping between
/// them is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    pub score: u8,
    #[serde(rename = "type")]
    pub category: SentimentCategory,
}

impl Sentiment {
    pub fn new(score: u8, category: SentimentCategory) -> Self {
        Self { score, category }
    }
}

/// 未驗證的文章資料，來自檔案或內建資料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub source: String,
    pub summary: String,
    pub url: String,
    pub sentiment: Sentiment,
    pub date: String,
}

impl ArticleRecord {
    /// 驗證並轉成 `Article`，`label` 用於錯誤訊息 (例如 "row 3")
    pub fn into_article(self, label: &str) -> Result<Article> {
        let reject = |field: &str, reason: String| NewsError::InvalidArticleError {
            article: label.to_string(),
            field: field.to_string(),
            reason,
        };

        validate_non_empty_string("title", &self.title)
            .map_err(|_| reject("title", "title cannot be empty".to_string()))?;
        validate_non_empty_string("source", &self.source)
            .map_err(|_| reject("source", "source cannot be empty".to_string()))?;
        validate_range("sentiment.score", self.sentiment.score, 0, 100).map_err(|_| {
            reject(
                "sentiment.score",
                format!("score {} is outside 0..=100", self.sentiment.score),
            )
        })?;
        validate_url("url", &self.url).map_err(|e| reject("url", e.to_string()))?;

        let published = parse_published(&self.date)
            .ok_or_else(|| reject("date", format!("'{}' is not an ISO date", self.date)))?;

        Ok(Article {
            title: self.title,
            source: self.source,
            summary: self.summary,
            url: self.url,
            sentiment: self.sentiment,
            date: self.date,
            published,
        })
    }
}

/// Parses `YYYY-MM-DD` as midnight UTC, falling back to RFC 3339.
pub fn parse_published(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(day.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// A validated news article. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    title: String,
    source: String,
    summary: String,
    url: String,
    sentiment: Sentiment,
    date: String,
    #[serde(skip)]
    published: DateTime<Utc>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        summary: impl Into<String>,
        url: impl Into<String>,
        sentiment: Sentiment,
        date: impl Into<String>,
    ) -> Result<Self> {
        let record = ArticleRecord {
            title: title.into(),
            source: source.into(),
            summary: summary.into(),
            url: url.into(),
            sentiment,
            date: date.into(),
        };
        let label = format!("'{}'", record.title);
        record.into_article(&label)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// 原始日期字串
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn published(&self) -> DateTime<Utc> {
        self.published
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.published.timestamp_millis()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub enabled: bool,
}

impl Source {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
        }
    }

    pub fn disabled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOption {
    DateAsc,
    #[default]
    DateDesc,
    SourceAsc,
    SourceDesc,
    /// 無法辨識的排序鍵：保持原順序
    Unordered,
}

impl SortOption {
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::DateAsc => "date-asc",
            SortOption::DateDesc => "date-desc",
            SortOption::SourceAsc => "source-asc",
            SortOption::SourceDesc => "source-desc",
            SortOption::Unordered => "unordered",
        }
    }

    pub fn parse(key: &str) -> Self {
        match key.trim() {
            "date-asc" => SortOption::DateAsc,
            "date-desc" => SortOption::DateDesc,
            "source-asc" => SortOption::SourceAsc,
            "source-desc" => SortOption::SourceDesc,
            other => {
                tracing::debug!("Unknown sort option '{}', keeping original order", other);
                SortOption::Unordered
            }
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for SortOption {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for SortOption {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SortOption> for String {
    fn from(value: SortOption) -> Self {
        value.key().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub timestamp: i64,
    pub average_score: f64,
}

impl TrendPoint {
    /// X 軸標籤，例如 "Mar 15"
    pub fn axis_label(&self) -> String {
        DateTime::from_timestamp_millis(self.timestamp)
            .map(|dt| dt.format("%b %-d").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: usize,
    pub fill: &'static str,
}

impl SentimentDistribution {
    pub fn record(&mut self, category: SentimentCategory) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Negative => self.negative += 1,
            SentimentCategory::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, category: SentimentCategory) -> usize {
        match category {
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Negative => self.negative,
            SentimentCategory::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn slices(&self) -> Vec<DistributionSlice> {
        SentimentCategory::ALL
            .iter()
            .map(|category| DistributionSlice {
                name: category.label(),
                value: self.count(*category),
                fill: category.color(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSentiment {
    pub source: String,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SourceSentiment {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            positive: 0,
            negative: 0,
            neutral: 0,
        }
    }

    pub fn record(&mut self, category: SentimentCategory) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Negative => self.negative += 1,
            SentimentCategory::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Everything the dashboard renders, recomputed from scratch on each change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    pub filtered_articles: Vec<Article>,
    pub sorted_articles: Vec<Article>,
    pub trend: Vec<TrendPoint>,
    pub distribution: SentimentDistribution,
    pub per_source_distribution: Vec<SourceSentiment>,
}

impl DerivedView {
    /// 單一來源的最大文章數，用於長條圖刻度
    pub fn max_source_count(&self) -> usize {
        self.per_source_distribution
            .iter()
            .map(SourceSentiment::total)
            .max()
            .unwrap_or(0)
    }
}

/// 轉換結果：衍生視圖與已渲染的匯出內容
#[derive(Debug, Clone)]
pub struct DashboardOutput {
    pub view: DerivedView,
    pub articles_csv: String,
    pub trend_csv: String,
    pub source_csv: String,
}
