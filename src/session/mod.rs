//! 單一使用者的工作階段狀態：
//! 來源開關、排序、關鍵字與收藏、選取的文章。
//!
//! None of this feeds back into the article set; the deriver only reads
//! `sources()` and `sort_option()`.

use crate::adapters::catalog::default_sources;
use crate::domain::model::{Article, SortOption, Source};
use chrono::NaiveDate;
use serde::Serialize;

/// Snapshot of the search form at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub keyword: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sources: Vec<String>,
}

/// 預覽窗格需要的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticlePreview<'a> {
    pub source: &'a str,
    pub title: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    sources: Vec<Source>,
    sort_option: SortOption,
    keyword: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    favorite_keywords: Vec<String>,
    selected_article: Option<Article>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(default_sources())
    }
}

impl SessionState {
    pub fn new(sources: Vec<Source>) -> Self {
        Self {
            sources,
            sort_option: SortOption::default(),
            keyword: String::new(),
            start_date: None,
            end_date: None,
            favorite_keywords: Vec::new(),
            selected_article: None,
        }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn enabled_source_names(&self) -> Vec<String> {
        self.sources
            .iter()
            .filter(|source| source.enabled)
            .map(|source| source.name.clone())
            .collect()
    }

    /// 切換來源開關，回傳新的狀態；找不到來源時回傳 `None`
    pub fn toggle_source(&mut self, name: &str) -> Option<bool> {
        let source = self.sources.iter_mut().find(|source| source.name == name);
        match source {
            Some(source) => {
                source.enabled = !source.enabled;
                tracing::debug!("Source '{}' enabled: {}", name, source.enabled);
                Some(source.enabled)
            }
            None => {
                tracing::debug!("Ignoring toggle for unknown source '{}'", name);
                None
            }
        }
    }

    pub fn set_source_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.sources.iter_mut().find(|source| source.name == name) {
            Some(source) => {
                source.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    pub fn set_sort_option(&mut self, option: SortOption) {
        self.sort_option = option;
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start_date, self.end_date)
    }

    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.start_date = start;
        self.end_date = end;
    }

    pub fn favorite_keywords(&self) -> &[String] {
        &self.favorite_keywords
    }

    pub fn is_favorite_keyword(&self) -> bool {
        self.favorite_keywords.contains(&self.keyword)
    }

    /// Adds or removes the current keyword. Blank keywords are ignored.
    pub fn toggle_favorite_keyword(&mut self) {
        if self.keyword.trim().is_empty() {
            return;
        }
        if self.is_favorite_keyword() {
            let keyword = self.keyword.clone();
            self.favorite_keywords.retain(|kw| *kw != keyword);
        } else {
            self.favorite_keywords.push(self.keyword.clone());
        }
    }

    pub fn add_favorite_keyword(&mut self, keyword: &str) {
        if keyword.trim().is_empty() || self.favorite_keywords.iter().any(|kw| kw == keyword) {
            return;
        }
        self.favorite_keywords.push(keyword.to_string());
    }

    pub fn remove_favorite_keyword(&mut self, keyword: &str) {
        self.favorite_keywords.retain(|kw| kw != keyword);
    }

    pub fn select_favorite_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
        tracing::info!("Selected favorite keyword: {}", keyword);
    }

    pub fn select_article(&mut self, article: Article) {
        self.selected_article = Some(article);
    }

    pub fn clear_selection(&mut self) {
        self.selected_article = None;
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.selected_article.as_ref()
    }

    pub fn preview(&self) -> Option<ArticlePreview<'_>> {
        self.selected_article.as_ref().map(|article| ArticlePreview {
            source: article.source(),
            title: article.title(),
            url: article.url(),
        })
    }

    /// 搜尋目前只記錄查詢內容，不會執行任何查詢
    pub fn search(&self) -> SearchQuery {
        let query = SearchQuery {
            keyword: self.keyword.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            sources: self.enabled_source_names(),
        };
        tracing::info!(
            "Searching for: '{}' between {:?} and {:?}",
            query.keyword,
            query.start_date,
            query.end_date
        );
        tracing::info!("Selected sources: {:?}", query.sources);
        query
    }
}
