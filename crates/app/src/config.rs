//! Client configuration

use clap::{Args, ValueEnum};
use rusty_money::iso::Currency;
use surgihub::prices::currency_from_code;

/// Backend connection and store settings.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Storefront API root
    #[arg(
        long,
        env = "SURGIHUB_API_URL",
        default_value = "http://localhost:5000/api",
        global = true
    )]
    pub api_url: String,

    /// Bearer token from a previous login
    #[arg(long, env = "SURGIHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Store currency (USD, GBP, EUR)
    #[arg(
        long,
        env = "SURGIHUB_CURRENCY",
        default_value = "USD",
        value_parser = currency_from_code,
        global = true
    )]
    pub currency: &'static Currency,
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}
