use crate::adapters::http::DEFAULT_API_ENDPOINT;
use crate::core::storefront::DEFAULT_SEARCH_ID;
use crate::core::StorefrontSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "shopnest")]
#[command(about = "ShopNest storefront demo: catalog, cart, order summary and a demo API call")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_SEARCH_ID, help = "Product id to search for")]
    pub search_id: String,

    #[arg(long, help = "TOML catalog file used instead of the demo catalog")]
    pub catalog: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            search_id: DEFAULT_SEARCH_ID.to_string(),
            catalog: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl StorefrontSettings for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn search_id(&self) -> &str {
        &self.search_id
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("search_id", &self.search_id)?;

        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
            validate_file_extension("catalog", path, &["toml"])?;
        }

        Ok(())
    }
}
