use news_insight::core::sort::sort_articles;
use news_insight::{
    Article, SessionState, SortOption, Source, StaticCatalog, ViewStateDeriver,
};
use std::collections::HashSet;

fn catalog() -> Vec<Article> {
    StaticCatalog::new().load().unwrap()
}

/// 所有 2^5 種來源開關組合
fn every_source_selection() -> Vec<SessionState> {
    (0u32..32)
        .map(|mask| {
            let mut session = SessionState::default();
            let names: Vec<String> = session.sources().iter().map(|s| s.name.clone()).collect();
            for (bit, name) in names.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    session.toggle_source(name);
                }
            }
            session
        })
        .collect()
}

#[test]
fn test_filter_output_only_contains_enabled_sources() {
    let articles = catalog();
    let deriver = ViewStateDeriver::new(&articles);

    for session in every_source_selection() {
        let enabled: HashSet<String> = session.enabled_source_names().into_iter().collect();
        let view = deriver.derive_for(&session);

        let expected = articles
            .iter()
            .filter(|a| enabled.contains(a.source()))
            .count();
        assert_eq!(view.filtered_articles.len(), expected);
        assert!(view
            .filtered_articles
            .iter()
            .all(|a| enabled.contains(a.source())));
    }
}

#[test]
fn test_distribution_always_sums_to_filtered_len() {
    let articles = catalog();
    let deriver = ViewStateDeriver::new(&articles);

    for session in every_source_selection() {
        let view = deriver.derive_for(&session);
        assert_eq!(view.distribution.total(), view.filtered_articles.len());
    }
}

#[test]
fn test_trend_has_one_point_per_distinct_date_in_order() {
    let articles = catalog();
    let deriver = ViewStateDeriver::new(&articles);

    for session in every_source_selection() {
        let view = deriver.derive_for(&session);
        let dates: HashSet<&str> = view.filtered_articles.iter().map(Article::date).collect();

        assert_eq!(view.trend.len(), dates.len());
        assert!(view
            .trend
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));
    }
}

#[test]
fn test_per_source_entries_are_never_empty() {
    let articles = catalog();
    let deriver = ViewStateDeriver::new(&articles);

    for session in every_source_selection() {
        let view = deriver.derive_for(&session);
        assert!(view
            .per_source_distribution
            .iter()
            .all(|entry| entry.total() > 0));
        assert!(view.per_source_distribution.len() <= session.enabled_source_names().len());
    }
}

#[test]
fn test_sorted_is_permutation_of_filtered() {
    let articles = catalog();
    let deriver = ViewStateDeriver::new(&articles);
    let sources = SessionState::default().sources().to_vec();

    for option in [
        SortOption::DateAsc,
        SortOption::DateDesc,
        SortOption::SourceAsc,
        SortOption::SourceDesc,
        SortOption::Unordered,
    ] {
        let view = deriver.derive(&sources, option);
        assert_eq!(view.sorted_articles.len(), view.filtered_articles.len());
        for article in &view.filtered_articles {
            assert!(view.sorted_articles.contains(article));
        }
        assert_eq!(sort_articles(&view.sorted_articles, option), view.sorted_articles);
    }
}

#[test]
fn test_catalog_source_sort_order() {
    let articles = catalog();
    let sorted = sort_articles(&articles, SortOption::SourceAsc);
    let sources: Vec<&str> = sorted.iter().map(Article::source).collect();

    assert_eq!(
        sources,
        vec![
            "climatereport.org",
            "climatereport.org",
            "greentech.com",
            "greentech.com",
            "quantumtech.org",
            "spacenews.com",
            "spacenews.com",
            "techeconomy.com",
            "techeconomy.com",
            "techeconomy.com",
        ]
    );
    // 同來源維持原順序
    assert_eq!(sorted[0].date(), "2025-04-08");
    assert_eq!(sorted[1].date(), "2025-04-01");
}

#[test]
fn test_session_changes_flow_into_view() {
    let articles = catalog();
    let deriver = ViewStateDeriver::new(&articles);
    let mut session = SessionState::default();

    let all = deriver.derive_for(&session);
    assert_eq!(all.filtered_articles.len(), 10);
    assert_eq!(all.sorted_articles[0].date(), "2025-04-20");

    session.toggle_source("techeconomy.com");
    session.set_sort_option(SortOption::parse("source-desc"));
    let narrowed = deriver.derive_for(&session);
    assert_eq!(narrowed.filtered_articles.len(), 7);
    assert_eq!(narrowed.sorted_articles[0].source(), "spacenews.com");

    session.select_article(narrowed.sorted_articles[0].clone());
    let preview = session.preview().unwrap();
    assert_eq!(preview.source, "spacenews.com");
    assert_eq!(preview.url, "https://example.com/article2");

    session.clear_selection();
    assert!(session.preview().is_none());
}

#[test]
fn test_only_source_disabled_yields_empty_view() {
    let articles = vec![Article::new(
        "A",
        "S1",
        "summary",
        "https://example.com/a",
        news_insight::Sentiment::new(70, news_insight::SentimentCategory::Positive),
        "2025-01-01",
    )
    .unwrap()];
    let deriver = ViewStateDeriver::new(&articles);

    let view = deriver.derive(&[Source::disabled("S1")], SortOption::default());

    assert!(view.filtered_articles.is_empty());
    assert!(view.trend.is_empty());
    assert_eq!(view.distribution.total(), 0);
    assert!(view.per_source_distribution.is_empty());
}
