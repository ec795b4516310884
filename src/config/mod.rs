pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::SortOption;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::session::SessionState;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{parser::ValueSource, CommandFactory, FromArgMatches, Parser};
#[cfg(feature = "cli")]
use std::ffi::OsString;
#[cfg(feature = "cli")]
use toml_config::DashboardConfig;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "news-insight")]
#[command(about = "Filter, sort and summarise news sentiment")]
pub struct CliConfig {
    /// Article file (.csv or .json); the built-in sample set is used when omitted
    #[arg(long)]
    pub articles: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// date-asc, date-desc, source-asc or source-desc
    #[arg(long)]
    pub sort: Option<SortOption>,

    /// Source to switch off (repeatable)
    #[arg(long = "disable-source")]
    pub disabled_sources: Vec<String>,

    #[arg(long)]
    pub keyword: Option<String>,

    #[arg(long = "format", value_delimiter = ',', default_values = ["csv", "json"])]
    pub output_formats: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// `--output-path` 是否由命令列明確指定 (而非預設值)
    #[arg(skip)]
    #[serde(skip)]
    explicit_output_path: bool,

    #[arg(skip)]
    #[serde(skip)]
    explicit_output_formats: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Parses like `parse_from`, also recording which output flags were given explicitly.
    pub fn parse_tracked<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().get_matches_from(args);
        let mut cli = Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
        cli.explicit_output_path =
            matches.value_source("output_path") == Some(ValueSource::CommandLine);
        cli.explicit_output_formats =
            matches.value_source("output_formats") == Some(ValueSource::CommandLine);
        cli
    }

    /// 命令列參數覆蓋設定檔；未明確指定的輸出參數保留設定檔的值
    pub fn apply_to(&self, config: &mut DashboardConfig) {
        if let Some(articles) = &self.articles {
            config.input.articles = Some(articles.clone());
        }
        if let Some(sort) = self.sort {
            config.session.sort = Some(sort);
        }
        if let Some(keyword) = &self.keyword {
            config.session.keyword = Some(keyword.clone());
        }
        if !self.disabled_sources.is_empty() {
            config
                .session
                .disabled_sources
                .get_or_insert_with(Vec::new)
                .extend(self.disabled_sources.iter().cloned());
        }
        if self.explicit_output_path {
            tracing::info!(
                "--output-path overrides load.output_path: {}",
                self.output_path
            );
            config.load.output_path = self.output_path.clone();
        }
        if self.explicit_output_formats {
            tracing::info!(
                "--format overrides load.output_formats: {}",
                self.output_formats.join(",")
            );
            config.load.output_formats = self.output_formats.clone();
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn session(&self) -> SessionState {
        let mut session = SessionState::default();
        session.set_sort_option(self.sort.unwrap_or_default());
        for name in &self.disabled_sources {
            if !session.set_source_enabled(name, false) {
                tracing::warn!("Unknown source '{}' ignored", name);
            }
        }
        if let Some(keyword) = &self.keyword {
            session.set_keyword(keyword.as_str());
        }
        session
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("format", &self.output_formats)?;
        if let Some(articles) = &self.articles {
            validation::validate_file_extension("articles", articles, &["csv", "json"])?;
        }
        Ok(())
    }
}
