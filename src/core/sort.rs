use crate::domain::model::{Article, SortOption};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// 依排序選項回傳新的排序結果，原序列不變。
///
/// `Vec::sort_by` is stable, so ties keep their relative order.
pub fn sort_articles(articles: &[Article], option: SortOption) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    match option {
        SortOption::DateAsc => sorted.sort_by(|a, b| a.published().cmp(&b.published())),
        SortOption::DateDesc => sorted.sort_by(|a, b| b.published().cmp(&a.published())),
        SortOption::SourceAsc => sorted.sort_by(|a, b| locale_compare(a.source(), b.source())),
        SortOption::SourceDesc => sorted.sort_by(|a, b| locale_compare(b.source(), a.source())),
        SortOption::Unordered => {}
    }
    sorted
}

/// 比較用的主鍵：NFD 分解後去掉重音符號並轉小寫
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accented_letters(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Collation in three levels: base letters, then accents (unaccented first),
/// then case (lowercase first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented_letters(a).cmp(&accented_letters(b)))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Sentiment, SentimentCategory};

    fn article(title: &str, source: &str, date: &str) -> Article {
        Article::new(
            title,
            source,
            "summary",
            "https://example.com/a",
            Sentiment::new(50, SentimentCategory::Neutral),
            date,
        )
        .unwrap()
    }

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(Article::title).collect()
    }

    fn sample() -> Vec<Article> {
        vec![
            article("a", "techeconomy.com", "2025-03-15"),
            article("b", "climatereport.org", "2025-04-08"),
            article("c", "greentech.com", "2025-03-09"),
            article("d", "spacenews.com", "2025-04-20"),
        ]
    }

    #[test]
    fn test_date_ascending_and_descending() {
        let articles = sample();

        assert_eq!(
            titles(&sort_articles(&articles, SortOption::DateAsc)),
            vec!["c", "a", "b", "d"]
        );
        assert_eq!(
            titles(&sort_articles(&articles, SortOption::DateDesc)),
            vec!["d", "b", "a", "c"]
        );
    }

    #[test]
    fn test_reversed_ascending_equals_descending_without_ties() {
        let articles = sample();
        let mut ascending = sort_articles(&articles, SortOption::DateAsc);
        ascending.reverse();

        assert_eq!(ascending, sort_articles(&articles, SortOption::DateDesc));
    }

    #[test]
    fn test_date_ties_keep_original_order() {
        let articles = vec![
            article("first", "s1", "2025-04-01"),
            article("older", "s1", "2025-03-01"),
            article("second", "s2", "2025-04-01"),
        ];

        assert_eq!(
            titles(&sort_articles(&articles, SortOption::DateDesc)),
            vec!["first", "second", "older"]
        );
        assert_eq!(
            titles(&sort_articles(&articles, SortOption::DateAsc)),
            vec!["older", "first", "second"]
        );
    }

    #[test]
    fn test_source_sort_is_stable() {
        let articles = vec![
            article("x", "techeconomy.com", "2025-03-15"),
            article("y", "climatereport.org", "2025-04-08"),
            article("z", "techeconomy.com", "2025-04-01"),
        ];

        assert_eq!(
            titles(&sort_articles(&articles, SortOption::SourceAsc)),
            vec!["y", "x", "z"]
        );
        assert_eq!(
            titles(&sort_articles(&articles, SortOption::SourceDesc)),
            vec!["x", "z", "y"]
        );
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let articles = sample();
        for option in [
            SortOption::DateAsc,
            SortOption::DateDesc,
            SortOption::SourceAsc,
            SortOption::SourceDesc,
        ] {
            let once = sort_articles(&articles, option);
            assert_eq!(sort_articles(&once, option), once);
        }
    }

    #[test]
    fn test_unordered_keeps_input_order() {
        let articles = sample();
        assert_eq!(sort_articles(&articles, SortOption::Unordered), articles);
    }

    #[test]
    fn test_locale_compare_ignores_case() {
        assert_eq!(locale_compare("Beta", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("alpha", "Alpha"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_folds_accents() {
        assert_eq!(locale_compare("école.fr", "zeit.de"), Ordering::Less);
        assert_eq!(locale_compare("école.fr", "faz.net"), Ordering::Less);
        assert_eq!(locale_compare("ecole.fr", "école.fr"), Ordering::Less);
        assert_eq!(locale_compare("Élan", "elan"), Ordering::Greater);
    }

    #[test]
    fn test_source_sort_places_accented_names_by_base_letter() {
        let articles = vec![
            article("z", "zeit.de", "2025-04-01"),
            article("e", "école.fr", "2025-04-02"),
            article("f", "faz.net", "2025-04-03"),
        ];

        let sorted = sort_articles(&articles, SortOption::SourceAsc);
        let sources: Vec<_> = sorted.iter().map(Article::source).collect();

        assert_eq!(sources, vec!["école.fr", "faz.net", "zeit.de"]);
    }
}
