use crate::core::aggregate::{sentiment_distribution, sentiment_trend, source_sentiment};
use crate::core::filter::filter_by_source;
use crate::core::sort::sort_articles;
use crate::domain::model::{Article, DerivedView, SortOption, Source};
use crate::session::SessionState;

/// Turns the raw article set plus filter state into a `DerivedView`.
///
/// Every call recomputes from scratch; nothing is cached between calls.
pub struct ViewStateDeriver<'a> {
    articles: &'a [Article],
}

impl<'a> ViewStateDeriver<'a> {
    pub fn new(articles: &'a [Article]) -> Self {
        Self { articles }
    }

    pub fn derive(&self, sources: &[Source], sort: SortOption) -> DerivedView {
        let filtered_articles = filter_by_source(self.articles, sources);
        let sorted_articles = sort_articles(&filtered_articles, sort);
        let trend = sentiment_trend(&filtered_articles);
        let distribution = sentiment_distribution(&filtered_articles);
        let per_source_distribution = source_sentiment(&filtered_articles, sources);

        tracing::debug!(
            "Derived view: {} of {} articles, {} trend points, {} sources (sort: {})",
            filtered_articles.len(),
            self.articles.len(),
            trend.len(),
            per_source_distribution.len(),
            sort
        );

        DerivedView {
            filtered_articles,
            sorted_articles,
            trend,
            distribution,
            per_source_distribution,
        }
    }

    pub fn derive_for(&self, session: &SessionState) -> DerivedView {
        self.derive(session.sources(), session.sort_option())
    }
}
