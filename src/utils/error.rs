use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid article {article} field '{field}': {reason}")]
    InvalidArticleError {
        article: String,
        field: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl NewsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NewsError::IoError(_) => ErrorCategory::Io,
            NewsError::CsvError(_)
            | NewsError::SerializationError(_)
            | NewsError::InvalidArticleError { .. } => ErrorCategory::Data,
            NewsError::TomlError(_)
            | NewsError::ConfigError { .. }
            | NewsError::InvalidConfigValueError { .. }
            | NewsError::MissingConfigError { .. } => ErrorCategory::Configuration,
            NewsError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NewsError::IoError(_) => {
                "Check that the input file exists and the output directory is writable"
            }
            NewsError::CsvError(_) => {
                "Make sure the CSV header is: title,source,summary,url,score,sentiment,date"
            }
            NewsError::SerializationError(_) => "Check the JSON article file for syntax errors",
            NewsError::TomlError(_) => "Make sure the config file is valid TOML",
            NewsError::ConfigError { .. } | NewsError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again"
            }
            NewsError::MissingConfigError { .. } => {
                "Add the missing field to the config file or pass it on the command line"
            }
            NewsError::InvalidArticleError { .. } => {
                "Fix the article data: dates must be ISO (YYYY-MM-DD) and scores between 0 and 100"
            }
            NewsError::ProcessingError { .. } => "Re-run with --verbose to see which phase failed",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NewsError::IoError(e) => format!("Could not read or write a file: {}", e),
            NewsError::InvalidArticleError {
                article,
                field,
                reason,
            } => format!("Article {} has an invalid {}: {}", article, field, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;
