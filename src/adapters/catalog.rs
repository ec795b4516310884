use crate::domain::model::{Article, ArticleRecord, Sentiment, SentimentCategory, Source};
use crate::domain::ports::ArticleProvider;
use crate::utils::error::Result;

pub const CATALOG_SOURCES: [&str; 5] = [
    "climatereport.org",
    "techeconomy.com",
    "quantumtech.org",
    "greentech.com",
    "spacenews.com",
];

pub fn default_sources() -> Vec<Source> {
    CATALOG_SOURCES.iter().map(|name| Source::new(*name)).collect()
}

fn record(
    title: &str,
    source: &str,
    summary: &str,
    url: &str,
    score: u8,
    category: SentimentCategory,
    date: &str,
) -> ArticleRecord {
    ArticleRecord {
        title: title.to_string(),
        source: source.to_string(),
        summary: summary.to_string(),
        url: url.to_string(),
        sentiment: Sentiment::new(score, category),
        date: date.to_string(),
    }
}

fn catalog_records() -> Vec<ArticleRecord> {
    use SentimentCategory::{Negative, Neutral, Positive};

    const CLIMATE: &str =
        "New research indicates significant changes in global temperature patterns...";
    const ECONOMY: &str =
        "Latest analysis shows emerging patterns in technology sector investments...";
    const QUANTUM: &str = "Scientists announce major advancement in quantum computing stability...";
    const ENERGY: &str =
        "Innovative renewable energy technologies are reshaping the power generation...";
    const SPACE: &str =
        "Recent missions reveal groundbreaking discoveries about distant planets...";

    vec![
        record(
            "Global Climate Change Report 2025",
            "techeconomy.com",
            CLIMATE,
            "https://example.com/article2",
            65,
            Neutral,
            "2025-03-15",
        ),
        record(
            "Economic Trends in Tech Industry",
            "techeconomy.com",
            ECONOMY,
            "https://example.com/article3",
            88,
            Positive,
            "2025-04-01",
        ),
        record(
            "Breakthrough in Quantum Computing",
            "climatereport.org",
            QUANTUM,
            "https://example.com/article4",
            35,
            Negative,
            "2025-04-08",
        ),
        record(
            "Sustainable Energy Solutions",
            "greentech.com",
            ENERGY,
            "https://example.com/article5",
            78,
            Positive,
            "2025-03-25",
        ),
        record(
            "Advancements in Space Exploration",
            "techeconomy.com",
            SPACE,
            "https://example.com/article6",
            52,
            Neutral,
            "2025-04-03",
        ),
        record(
            "Global Climate Change Report 2025",
            "spacenews.com",
            CLIMATE,
            "https://example.com/article2",
            50,
            Neutral,
            "2025-04-20",
        ),
        record(
            "Economic Trends in Tech Industry",
            "quantumtech.org",
            ECONOMY,
            "https://example.com/article3",
            95,
            Positive,
            "2025-04-10",
        ),
        record(
            "Breakthrough in Quantum Computing",
            "climatereport.org",
            QUANTUM,
            "https://example.com/article4",
            25,
            Negative,
            "2025-04-01",
        ),
        record(
            "Sustainable Energy Solutions",
            "greentech.com",
            ENERGY,
            "https://example.com/article5",
            90,
            Positive,
            "2025-04-07",
        ),
        record(
            "Advancements in Space Exploration",
            "spacenews.com",
            SPACE,
            "https://example.com/article6",
            75,
            Positive,
            "2025-03-09",
        ),
    ]
}

/// The compiled-in sample articles.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self) -> Result<Vec<Article>> {
        catalog_records()
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_article(&format!("catalog #{}", i + 1)))
            .collect()
    }
}

impl ArticleProvider for StaticCatalog {
    async fn articles(&self) -> Result<Vec<Article>> {
        self.load()
    }
}
