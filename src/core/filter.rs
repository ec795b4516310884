use crate::domain::model::{Article, Source};
use std::collections::HashMap;

/// 只保留來源已啟用的文章。
///
/// An article whose source has no entry in `sources` is treated as disabled.
/// When a name appears more than once, the first entry wins.
pub fn filter_by_source(articles: &[Article], sources: &[Source]) -> Vec<Article> {
    let mut enabled: HashMap<&str, bool> = HashMap::with_capacity(sources.len());
    for source in sources {
        enabled.entry(source.name.as_str()).or_insert(source.enabled);
    }

    articles
        .iter()
        .filter(|article| enabled.get(article.source()).copied().unwrap_or(false))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Sentiment, SentimentCategory};

    fn article(title: &str, source: &str) -> Article {
        Article::new(
            title,
            source,
            "summary",
            "https://example.com/a",
            Sentiment::new(50, SentimentCategory::Neutral),
            "2025-04-01",
        )
        .unwrap()
    }

    #[test]
    fn test_keeps_only_enabled_sources() {
        let articles = vec![
            article("a", "s1"),
            article("b", "s2"),
            article("c", "s1"),
        ];
        let sources = vec![Source::new("s1"), Source::disabled("s2")];

        let filtered = filter_by_source(&articles, &sources);

        let titles: Vec<_> = filtered.iter().map(Article::title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_source_is_excluded() {
        let articles = vec![article("a", "unknown.org"), article("b", "s1")];
        let sources = vec![Source::new("s1")];

        let filtered = filter_by_source(&articles, &sources);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].source(), "s1");
    }

    #[test]
    fn test_size_matches_enabled_count() {
        let articles = vec![
            article("a", "s1"),
            article("b", "s2"),
            article("c", "s3"),
            article("d", "s2"),
        ];
        let sources = vec![Source::disabled("s1"), Source::new("s2"), Source::new("s3")];

        let filtered = filter_by_source(&articles, &sources);
        let expected = articles
            .iter()
            .filter(|a| a.source() == "s2" || a.source() == "s3")
            .count();

        assert_eq!(filtered.len(), expected);
        assert!(filtered.iter().all(|a| articles.contains(a)));
    }

    #[test]
    fn test_first_duplicate_entry_wins() {
        let articles = vec![article("a", "s1")];
        let sources = vec![Source::disabled("s1"), Source::new("s1")];

        assert!(filter_by_source(&articles, &sources).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(filter_by_source(&[], &[Source::new("s1")]).is_empty());
        assert!(filter_by_source(&[article("a", "s1")], &[]).is_empty());
    }
}
