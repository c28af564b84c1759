use clap::Args;
use rust_decimal::Decimal;
use surgihub::products::ProductId;
use surgihub_app::{
    api::{CategoryDraft, CategoryId, ProductDraft},
    domain::admin::AdminService,
};

use crate::cli::failure;

#[derive(Debug, Args)]
pub(crate) struct SaveProductArgs {
    /// Existing product to update
    #[arg(long)]
    id: Option<ProductId>,

    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Unit price, e.g. 24.99
    #[arg(long)]
    price: Decimal,

    #[arg(long, default_value_t = 0)]
    stock: u32,

    #[arg(long)]
    category: Option<CategoryId>,

    #[arg(long)]
    image_url: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct SaveCategoryArgs {
    /// Existing category to update
    #[arg(long)]
    id: Option<CategoryId>,

    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long)]
    image_url: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product id
    id: ProductId,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteCategoryArgs {
    /// Category id
    id: CategoryId,
}

pub(crate) async fn products(admin: &AdminService) -> Result<(), String> {
    let products = admin
        .products()
        .await
        .map_err(|error| failure("failed to list products", &error))?;

    for product in products {
        println!(
            "{}\t{}\t{}\t{}",
            product.id,
            product.name,
            product.price,
            product.stock.map_or_else(|| "-".to_string(), |stock| stock.to_string())
        );
    }

    Ok(())
}

pub(crate) async fn categories(admin: &AdminService) -> Result<(), String> {
    let categories = admin
        .categories()
        .await
        .map_err(|error| failure("failed to list categories", &error))?;

    for category in categories {
        println!("{}\t{}", category.id, category.name);
    }

    Ok(())
}

pub(crate) async fn save_product(
    admin: &AdminService,
    args: SaveProductArgs,
) -> Result<(), String> {
    if args.price.is_sign_negative() {
        return Err(format!("price cannot be negative: {}", args.price));
    }

    let draft = ProductDraft {
        name: args.name,
        description: args.description,
        price: args.price,
        stock: args.stock,
        category_id: args.category,
        image_url: args.image_url,
    };

    admin
        .save_product(args.id.as_ref(), &draft)
        .await
        .map_err(|error| failure("failed to save product", &error))?;

    println!("product saved");

    Ok(())
}

pub(crate) async fn save_category(
    admin: &AdminService,
    args: SaveCategoryArgs,
) -> Result<(), String> {
    let draft = CategoryDraft {
        name: args.name,
        description: args.description,
        image_url: args.image_url,
    };

    admin
        .save_category(args.id.as_ref(), &draft)
        .await
        .map_err(|error| failure("failed to save category", &error))?;

    println!("category saved");

    Ok(())
}

pub(crate) async fn delete_product(
    admin: &AdminService,
    args: DeleteProductArgs,
) -> Result<(), String> {
    admin
        .delete_product(&args.id)
        .await
        .map_err(|error| failure("failed to delete product", &error))?;

    println!("product {} deleted", args.id);

    Ok(())
}

pub(crate) async fn delete_category(
    admin: &AdminService,
    args: DeleteCategoryArgs,
) -> Result<(), String> {
    admin
        .delete_category(&args.id)
        .await
        .map_err(|error| failure("failed to delete category", &error))?;

    println!("category {} deleted", args.id);

    Ok(())
}
