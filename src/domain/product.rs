use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, ImageUrl, ProductDescription, ProductId, ProductName, ProductPrice, ProductRating,
    Slug, StockCount,
};

/// A catalog product addressable by its slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    /// External identity, derived from `name` at creation and never
    /// recomputed afterwards.
    pub slug: Slug,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub image_url: ImageUrl,
    pub stock: StockCount,
    pub rating: ProductRating,
    pub is_active: bool,
    pub category_id: CategoryId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// A product appears in listing endpoints iff it is active and in stock.
    pub fn is_visible(&self) -> bool {
        self.is_active && self.stock.get() > 0
    }
}

/// Information required to create a new [`Product`].
///
/// Rating and active flag are not part of the input: new products always
/// start unrated and active.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub slug: Slug,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub image_url: ImageUrl,
    pub stock: StockCount,
    pub category_id: CategoryId,
}

/// Attribute overwrite applied to an existing [`Product`].
///
/// Slug, rating and active flag are deliberately absent and survive the
/// update untouched.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ProductUpdate {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub stock: StockCount,
    pub category_id: CategoryId,
}
