use crate::domain::model::{Article, ArticleRecord, Sentiment, SentimentCategory};
use crate::domain::ports::{ArticleProvider, Storage};
use crate::utils::error::{NewsError, Result};
use crate::utils::validation::validate_file_extension;
use serde::Deserialize;

/// CSV 每列的格式：title,source,summary,url,score,sentiment,date
#[derive(Debug, Deserialize)]
struct CsvArticleRow {
    title: String,
    source: String,
    summary: String,
    url: String,
    score: u8,
    sentiment: SentimentCategory,
    date: String,
}

impl From<CsvArticleRow> for ArticleRecord {
    fn from(row: CsvArticleRow) -> Self {
        ArticleRecord {
            title: row.title,
            source: row.source,
            summary: row.summary,
            url: row.url,
            sentiment: Sentiment::new(row.score, row.sentiment),
            date: row.date,
        }
    }
}

/// Reads articles from a `.json` or `.csv` file through a `Storage`.
pub struct FileArticleProvider<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileArticleProvider<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        validate_file_extension("input.articles", &path, &["csv", "json"])?;
        Ok(Self { storage, path })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

pub fn parse_json_articles(data: &[u8]) -> Result<Vec<Article>> {
    let records: Vec<ArticleRecord> = serde_json::from_slice(data)?;
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| record.into_article(&format!("#{}", i + 1)))
        .collect()
}

pub fn parse_csv_articles(data: &[u8]) -> Result<Vec<Article>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut articles = Vec::new();
    for (i, row) in reader.deserialize::<CsvArticleRow>().enumerate() {
        let record: ArticleRecord = row?.into();
        articles.push(record.into_article(&format!("row {}", i + 1))?);
    }
    Ok(articles)
}

impl<S: Storage> ArticleProvider for FileArticleProvider<S> {
    async fn articles(&self) -> Result<Vec<Article>> {
        tracing::debug!("Reading articles from: {}", self.path);
        let data = self.storage.read_file(&self.path).await?;

        if self.path.ends_with(".json") {
            parse_json_articles(&data)
        } else if self.path.ends_with(".csv") {
            parse_csv_articles(&data)
        } else {
            Err(NewsError::ConfigError {
                message: format!("Unsupported article file: {}", self.path),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                NewsError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_reads_json_articles() {
        let storage = MockStorage::default();
        storage
            .put(
                "news.json",
                r#"[
                    {
                        "title": "Economic Trends in Tech Industry",
                        "source": "quantumtech.org",
                        "summary": "Latest analysis...",
                        "url": "https://example.com/article3",
                        "sentiment": {"score": 95, "type": "positive"},
                        "date": "2025-04-10"
                    }
                ]"#,
            )
            .await;

        let provider = FileArticleProvider::new(storage, "news.json").unwrap();
        let articles = provider.articles().await.unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source(), "quantumtech.org");
        assert_eq!(
            articles[0].sentiment(),
            Sentiment::new(95, SentimentCategory::Positive)
        );
    }

    #[tokio::test]
    async fn test_reads_csv_articles() {
        let storage = MockStorage::default();
        storage
            .put(
                "news.csv",
                "title,source,summary,url,score,sentiment,date\n\
                 Sustainable Energy Solutions,greentech.com,\"Innovative, renewable\",https://example.com/article5,78,positive,2025-03-25\n\
                 Breakthrough in Quantum Computing,climatereport.org,Scientists announce...,https://example.com/article4,25,negative,2025-04-01\n",
            )
            .await;

        let provider = FileArticleProvider::new(storage, "news.csv").unwrap();
        let articles = provider.articles().await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].summary(), "Innovative, renewable");
        assert_eq!(articles[1].sentiment().category, SentimentCategory::Negative);
        assert_eq!(articles[1].date(), "2025-04-01");
    }

    #[tokio::test]
    async fn test_invalid_csv_row_names_row() {
        let storage = MockStorage::default();
        storage
            .put(
                "news.csv",
                "title,source,summary,url,score,sentiment,date\n\
                 Ok,greentech.com,s,https://example.com/a,50,neutral,2025-03-25\n\
                 Bad,greentech.com,s,https://example.com/b,50,neutral,March 25\n",
            )
            .await;

        let provider = FileArticleProvider::new(storage, "news.csv").unwrap();
        let err = provider.articles().await.unwrap_err();

        match err {
            NewsError::InvalidArticleError { article, field, .. } => {
                assert_eq!(article, "row 2");
                assert_eq!(field, "date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_unknown_extension() {
        assert!(FileArticleProvider::new(MockStorage::default(), "news.xml").is_err());
    }
}
