use crate::domain::model::{
    Article, SentimentDistribution, Source, SourceSentiment, TrendPoint,
};
use std::collections::HashMap;

struct DateGroup<'a> {
    date: &'a str,
    timestamp: i64,
    score_sum: u64,
    count: u64,
}

/// 依日期字串分組並計算平均分數，依時間戳記遞增排序。
///
/// Grouping uses exact string equality, so two spellings of the same day
/// stay separate. Groups with equal timestamps keep first-appearance order.
pub fn sentiment_trend(articles: &[Article]) -> Vec<TrendPoint> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<DateGroup<'_>> = Vec::new();

    for article in articles {
        let slot = *index.entry(article.date()).or_insert_with(|| {
            groups.push(DateGroup {
                date: article.date(),
                timestamp: article.timestamp(),
                score_sum: 0,
                count: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.score_sum += u64::from(article.sentiment().score);
        group.count += 1;
    }

    let mut trend: Vec<TrendPoint> = groups
        .into_iter()
        .map(|group| TrendPoint {
            date: group.date.to_string(),
            timestamp: group.timestamp,
            average_score: group.score_sum as f64 / group.count as f64,
        })
        .collect();
    trend.sort_by_key(|point| point.timestamp);
    trend
}

pub fn sentiment_distribution(articles: &[Article]) -> SentimentDistribution {
    articles
        .iter()
        .fold(SentimentDistribution::default(), |mut acc, article| {
            acc.record(article.sentiment().category);
            acc
        })
}

/// 每個來源的情緒統計，依來源清單順序，略過全為零的來源
pub fn source_sentiment(articles: &[Article], sources: &[Source]) -> Vec<SourceSentiment> {
    sources
        .iter()
        .map(|source| {
            let mut entry = SourceSentiment::new(source.name.as_str());
            for article in articles.iter().filter(|a| a.source() == source.name) {
                entry.record(article.sentiment().category);
            }
            entry
        })
        .filter(|entry| entry.total() > 0)
        .collect()
}
