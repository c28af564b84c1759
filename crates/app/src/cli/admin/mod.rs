use clap::{Args, Subcommand};
use surgihub_app::context::AppContext;

use crate::cli::failure;

mod catalog;
mod orders;

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Store counters and the latest orders
    Dashboard,
    /// List every order
    Orders,
    /// List registered users
    Users,
    /// List every product, active or not
    Products,
    /// List categories
    Categories,
    /// Create a product, or update it with --id
    SaveProduct(catalog::SaveProductArgs),
    /// Create a category, or update it with --id
    SaveCategory(catalog::SaveCategoryArgs),
    /// Move an order to a new status
    OrderStatus(orders::OrderStatusArgs),
    /// Delete a product
    DeleteProduct(catalog::DeleteProductArgs),
    /// Delete a category
    DeleteCategory(catalog::DeleteCategoryArgs),
}

pub(crate) async fn run(context: &AppContext, command: AdminCommand) -> Result<(), String> {
    let admin = context
        .admin()
        .map_err(|error| failure("admin console unavailable", &error))?;

    match command.command {
        AdminSubcommand::Dashboard => orders::dashboard(&admin).await,
        AdminSubcommand::Orders => orders::orders(&admin).await,
        AdminSubcommand::Users => orders::users(&admin).await,
        AdminSubcommand::OrderStatus(args) => orders::order_status(&admin, args).await,
        AdminSubcommand::Products => catalog::products(&admin).await,
        AdminSubcommand::Categories => catalog::categories(&admin).await,
        AdminSubcommand::SaveProduct(args) => catalog::save_product(&admin, args).await,
        AdminSubcommand::SaveCategory(args) => catalog::save_category(&admin, args).await,
        AdminSubcommand::DeleteProduct(args) => catalog::delete_product(&admin, args).await,
        AdminSubcommand::DeleteCategory(args) => catalog::delete_category(&admin, args).await,
    }
}
