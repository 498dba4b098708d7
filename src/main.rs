use anyhow::Context;
use clap::Parser;
use quote_pricer::domain::model::{QuoteRequest, QuoteStatus};
use quote_pricer::utils::error::ErrorSeverity;
use quote_pricer::utils::logger;
use quote_pricer::{
    Catalog, CliConfig, Command, LifecyclePolicy, MemoryQuoteStore, PriceQuery, PricingEngine,
    PricingError, QuoteService,
};
use serde::Serialize;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let catalog = match load_catalog(config.catalog.as_deref()) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => exit_with(e),
    };

    let engine = PricingEngine::new(Arc::clone(&catalog));

    match config.command {
        Command::Services => print_json(engine.list_services())?,
        Command::Service { name } => match engine.get_service(&name) {
            Ok(service) => print_json(service)?,
            Err(e) => exit_with(e),
        },
        Command::Price {
            service,
            complexity,
            currency,
            addons,
        } => {
            let query = PriceQuery {
                service,
                complexity,
                currency,
                addons,
            };
            match engine.calculate(&query) {
                Ok(breakdown) => print_json(&breakdown)?,
                Err(e) => exit_with(e),
            }
        }
        Command::Estimate { request } => {
            let request = read_request(&request)?;
            match engine.estimate(&request) {
                Ok(estimate) => print_json(&estimate)?,
                Err(e) => exit_with(e),
            }
        }
        Command::Quote { request, note } => {
            let request = read_request(&request)?;
            let service = QuoteService::new(engine, MemoryQuoteStore::new())
                .with_policy(catalog.lifecycle_policy());

            let priced = async {
                let quote = service.submit(request).await?;
                service.price_quote(quote.id, note.as_deref()).await
            };
            match priced.await {
                Ok(quote) => print_json(&quote)?,
                Err(e) => exit_with(e),
            }
        }
        Command::Transition {
            from,
            to,
            note,
            workflow,
        } => {
            let policy = if workflow {
                LifecyclePolicy::Workflow
            } else {
                catalog.lifecycle_policy()
            };
            let result = from
                .parse::<QuoteStatus>()
                .and_then(|current| engine.transition_status(current, &to, note.as_deref(), policy));
            match result {
                Ok(transition) => print_json(&transition)?,
                Err(e) => exit_with(e),
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&str>) -> quote_pricer::Result<Catalog> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            Catalog::from_file(path)
        }
        None => Catalog::builtin(),
    }
}

fn read_request(path: &str) -> anyhow::Result<QuoteRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading quote request {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parsing quote request {}", path))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_with(e: PricingError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
