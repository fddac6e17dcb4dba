use clap::Parser;
use shopnest::core::StorefrontSettings;
use shopnest::utils::error::ErrorSeverity;
use shopnest::utils::{logger, validation::Validate};
use shopnest::{ApiClient, Catalog, CliConfig, Storefront, SystemClock};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting shopnest storefront");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let catalog = match Catalog::from_settings(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // one client, one request, dropped at exit
    let api = ApiClient::new(reqwest::Client::new(), config.api_endpoint());
    let storefront = Storefront::with_search_id(api, SystemClock, config.search_id());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match storefront.run(&catalog, &mut out).await {
        Ok(report) => {
            tracing::info!(
                "✅ Storefront finished: {} order lines, total {}",
                report.order_lines,
                report.order_total
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Storefront failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
