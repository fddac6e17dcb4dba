use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parse error: {message}")]
    CatalogParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    FileSystem,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShopError::NetworkFailure(_) => ErrorCategory::Network,
            ShopError::IoError(_) => ErrorCategory::FileSystem,
            ShopError::CatalogParseError { .. } => ErrorCategory::Data,
            ShopError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // the storefront always reports and survives a failed API call
            ShopError::NetworkFailure(_) => ErrorSeverity::Low,
            ShopError::CatalogParseError { .. } | ShopError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            ShopError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::NetworkFailure(_) => {
                "Could not reach the demo products API".to_string()
            }
            ShopError::IoError(e) => format!("File or output error: {}", e),
            ShopError::CatalogParseError { message } => {
                format!("The catalog file could not be read: {}", message)
            }
            ShopError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection or the --api-endpoint value",
            ErrorCategory::FileSystem => "Check that the file exists and is readable",
            ErrorCategory::Configuration => "Run with --help to see the accepted options",
            ErrorCategory::Data => {
                "Each [[products]] entry needs string `id` and `name` and a numeric `price`"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
