use crate::adapters::catalog::default_sources;
use crate::domain::model::{SortOption, Source};
use crate::domain::ports::ConfigProvider;
use crate::session::SessionState;
use crate::utils::error::{NewsError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub dashboard: Option<DashboardInfo>,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// 文章檔案 (.csv / .json)，未設定時使用內建資料
    pub articles: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub sort: Option<SortOption>,
    pub sources: Option<Vec<String>>,
    pub disabled_sources: Option<Vec<String>>,
    pub keyword: Option<String>,
    pub favorite_keywords: Option<Vec<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// `[load]` 可整段省略，由命令列的 `--output-path` / `--format` 補上
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

impl DashboardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NewsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        self.dashboard
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("news-insight")
    }

    pub fn articles_path(&self) -> Option<&str> {
        self.input.articles.as_deref()
    }

    fn sources(&self) -> Vec<Source> {
        let mut sources = match &self.session.sources {
            Some(names) => names.iter().map(|name| Source::new(name.as_str())).collect(),
            None => default_sources(),
        };
        if let Some(disabled) = &self.session.disabled_sources {
            for name in disabled {
                let mut matched = false;
                for source in sources.iter_mut().filter(|s| &s.name == name) {
                    source.enabled = false;
                    matched = true;
                }
                if !matched {
                    tracing::warn!("Unknown source '{}' in session.disabled_sources ignored", name);
                }
            }
        }
        sources
    }
}

impl ConfigProvider for DashboardConfig {
    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn session(&self) -> SessionState {
        let mut session = SessionState::new(self.sources());
        session.set_sort_option(self.session.sort.unwrap_or_default());
        session.set_date_range(self.session.start_date, self.session.end_date);
        for keyword in self.session.favorite_keywords.iter().flatten() {
            session.add_favorite_keyword(keyword);
        }
        if let Some(keyword) = &self.session.keyword {
            session.set_keyword(keyword.as_str());
        }
        session
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        if self.load.output_path.is_empty() {
            return Err(NewsError::MissingConfigError {
                field: "load.output_path".to_string(),
            });
        }
        if self.load.output_formats.is_empty() {
            return Err(NewsError::MissingConfigError {
                field: "load.output_formats".to_string(),
            });
        }
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;

        if let Some(articles) = self.articles_path() {
            validation::validate_file_extension("input.articles", articles, &["csv", "json"])?;
        }

        if let Some(names) = &self.session.sources {
            for name in names {
                validation::validate_non_empty_string("session.sources", name)?;
            }
        }

        if let (Some(start), Some(end)) = (self.session.start_date, self.session.end_date) {
            if start > end {
                return Err(NewsError::InvalidConfigValueError {
                    field: "session.start_date".to_string(),
                    value: start.to_string(),
                    reason: format!("start date is after end date {}", end),
                });
            }
        }

        Ok(())
    }
}
