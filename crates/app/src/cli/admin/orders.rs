use clap::Args;
use surgihub_app::{
    api::{OrderId, OrderRecord, OrderStatus},
    domain::admin::AdminService,
};

use crate::cli::failure;

#[derive(Debug, Args)]
pub(crate) struct OrderStatusArgs {
    /// Order id
    id: OrderId,

    /// New status
    #[arg(value_enum)]
    status: OrderStatus,
}

pub(crate) async fn dashboard(admin: &AdminService) -> Result<(), String> {
    let dashboard = admin
        .dashboard()
        .await
        .map_err(|error| failure("failed to load dashboard", &error))?;

    println!("products: {}", dashboard.stats.products);
    println!("users: {}", dashboard.stats.users);
    println!("orders: {}", dashboard.stats.orders);
    println!("revenue: {}", dashboard.stats.revenue);
    println!("recent orders:");

    for order in &dashboard.recent_orders {
        println!("  {}", order_row(order));
    }

    Ok(())
}

pub(crate) async fn orders(admin: &AdminService) -> Result<(), String> {
    let orders = admin
        .orders()
        .await
        .map_err(|error| failure("failed to list orders", &error))?;

    for order in &orders {
        println!("{}", order_row(order));
    }

    Ok(())
}

pub(crate) async fn users(admin: &AdminService) -> Result<(), String> {
    let users = admin
        .users()
        .await
        .map_err(|error| failure("failed to list users", &error))?;

    for user in users {
        println!(
            "{}\t{}\t{}\t{:?}",
            user.id,
            user.email,
            user.full_name.as_deref().unwrap_or("-"),
            user.role
        );
    }

    Ok(())
}

pub(crate) async fn order_status(
    admin: &AdminService,
    args: OrderStatusArgs,
) -> Result<(), String> {
    admin
        .set_order_status(&args.id, args.status)
        .await
        .map_err(|error| failure("failed to update order status", &error))?;

    println!("order {} is now {:?}", args.id, args.status);

    Ok(())
}

fn order_row(order: &OrderRecord) -> String {
    format!(
        "{}\t{}\t{}\t{:?}\t{}",
        order.id,
        order.full_name.as_deref().unwrap_or("-"),
        order.total_amount,
        order.status,
        order.created_at.as_deref().unwrap_or("-")
    )
}
