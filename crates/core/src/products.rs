//! Products

use rusty_money::{Money, iso::Currency};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product as held by the cart and the wishlist.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Product image
    pub image_url: Option<String>,

    /// Display name of the product's category
    pub category_name: Option<String>,
}

impl Product {
    /// Create a product with no image or category.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money<'static, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: None,
            category_name: None,
        }
    }

    /// Set the product image.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the product category name.
    #[must_use]
    pub fn with_category_name(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = Some(category_name.into());
        self
    }
}
