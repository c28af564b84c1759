use clap::Args;
use surgihub::products::{Product, ProductId};
use surgihub_app::{
    api::CategoryId,
    context::AppContext,
    domain::reviews::ReviewDraft,
};

use crate::cli::failure;

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    /// Only list products in this category
    #[arg(long, conflicts_with = "featured")]
    category: Option<CategoryId>,

    /// Only list the home page selection
    #[arg(long)]
    featured: bool,
}

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product id
    id: ProductId,
}

#[derive(Debug, Args)]
pub(crate) struct ReviewArgs {
    /// Product id
    id: ProductId,

    /// Star rating, 1 to 5
    #[arg(long, default_value_t = ReviewDraft::default().rating)]
    rating: u8,

    /// Review text
    #[arg(long)]
    comment: String,
}

pub(crate) async fn products(context: &AppContext, args: ProductsArgs) -> Result<(), String> {
    let catalog = context.catalog();

    let products = if args.featured {
        catalog.featured().await
    } else {
        catalog.products(args.category).await
    }
    .map_err(|error| failure("failed to list products", &error))?;

    if products.is_empty() {
        println!("no products found");
    }

    for product in &products {
        println!("{}", product_row(product));
    }

    Ok(())
}

pub(crate) async fn categories(context: &AppContext) -> Result<(), String> {
    let categories = context
        .catalog()
        .categories()
        .await
        .map_err(|error| failure("failed to list categories", &error))?;

    for category in categories {
        println!("{}\t{}", category.id, category.name);
    }

    Ok(())
}

pub(crate) async fn product(context: &AppContext, args: ProductArgs) -> Result<(), String> {
    let detail = context
        .catalog()
        .product_detail(&args.id)
        .await
        .map_err(|error| failure("failed to load product", &error))?;

    println!("id: {}", detail.product.id);
    println!("name: {}", detail.product.name);
    println!("price: {}", detail.product.price);

    if let Some(category) = &detail.product.category_name {
        println!("category: {category}");
    }

    if let Some(stock) = detail.stock {
        println!("stock: {stock}");
    }

    if let Some(description) = &detail.description {
        println!("description: {description}");
    }

    match detail.average_rating() {
        Some(rating) => println!("rating: {rating:.1} ({} reviews)", detail.reviews.len()),
        None => println!("rating: no reviews yet"),
    }

    for review in &detail.reviews {
        println!(
            "  {}/5 {}: {}",
            review.rating,
            review.full_name.as_deref().unwrap_or("anonymous"),
            review.comment
        );
    }

    Ok(())
}

pub(crate) async fn review(context: &AppContext, args: ReviewArgs) -> Result<(), String> {
    let draft = ReviewDraft {
        rating: args.rating,
        comment: args.comment,
    };

    context
        .reviews()
        .submit(&context.session, &args.id, &draft)
        .await
        .map_err(|error| failure("failed to submit review", &error))?;

    println!("review submitted");

    Ok(())
}

fn product_row(product: &Product) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        product.id,
        product.name,
        product.price,
        product.category_name.as_deref().unwrap_or("-")
    )
}
