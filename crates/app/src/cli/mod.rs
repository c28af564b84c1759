use std::{error::Error, fmt::Write as _};

use clap::{Parser, Subcommand};
use surgihub_app::{
    config::{ClientConfig, LoggingConfig},
    context::AppContext,
};

mod account;
mod admin;
mod catalog;
mod orders;

#[derive(Debug, Parser)]
#[command(name = "surgihub", about = "SurgiHub storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    client: ClientConfig,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products
    Products(catalog::ProductsArgs),
    /// List categories
    Categories,
    /// Show a product with its reviews
    Product(catalog::ProductArgs),
    /// Review a product
    Review(catalog::ReviewArgs),
    /// Log in and print a bearer token
    Login(account::LoginArgs),
    /// Create a customer account
    Register(account::RegisterArgs),
    /// Ask for a bulk quote
    Quote(orders::QuoteArgs),
    /// Fill a cart and check out
    Order(orders::OrderArgs),
    /// Admin console
    Admin(admin::AdminCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::from_config(&self.client);

        match self.command {
            Commands::Products(args) => catalog::products(&context, args).await,
            Commands::Categories => catalog::categories(&context).await,
            Commands::Product(args) => catalog::product(&context, args).await,
            Commands::Review(args) => catalog::review(&context, args).await,
            Commands::Login(args) => account::login(&context, args).await,
            Commands::Register(args) => account::register(&context, args).await,
            Commands::Quote(args) => orders::quote(&context, args).await,
            Commands::Order(args) => orders::order(&context, args).await,
            Commands::Admin(command) => admin::run(&context, command).await,
        }
    }
}

/// Render an error with its whole source chain.
pub(crate) fn failure(action: &str, error: &dyn Error) -> String {
    let mut message = format!("{action}: {error}");
    let mut source = error.source();

    while let Some(cause) = source {
        let _ = write!(message, ": {cause}");
        source = cause.source();
    }

    message
}
