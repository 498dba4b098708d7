pub mod catalog_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "quote-pricer")]
#[command(about = "Price estimation for professional-service quote requests")]
pub struct CliConfig {
    /// Path to a TOML catalog; the built-in catalog is used when omitted
    #[arg(long, global = true, env = "QUOTE_PRICER_CATALOG")]
    pub catalog: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all services in the catalog
    Services,

    /// Show one service by name
    Service { name: String },

    /// Price a service at a given complexity tier
    Price {
        #[arg(long)]
        service: String,

        #[arg(long)]
        complexity: Option<String>,

        #[arg(long)]
        currency: Option<String>,

        #[arg(long, value_delimiter = ',')]
        addons: Vec<String>,
    },

    /// Classify and price a JSON quote request
    Estimate { request: String },

    /// Submit a JSON quote request, price it and print the quote record
    Quote {
        request: String,

        #[arg(long)]
        note: Option<String>,
    },

    /// Check a status change
    Transition {
        from: String,
        to: String,

        #[arg(long)]
        note: Option<String>,

        #[arg(long, help = "Enforce the forward-only workflow graph")]
        workflow: bool,
    },
}
