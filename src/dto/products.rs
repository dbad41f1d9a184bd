use serde::Serialize;

use crate::domain::product::Product;

/// JSON representation of a product returned by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub stock: i32,
    pub rating: f64,
    pub is_active: bool,
    pub category_id: i32,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            slug: value.slug.into_inner(),
            description: value.description.into_inner(),
            price: value.price.get(),
            image_url: value.image_url.into_inner(),
            stock: value.stock.get(),
            rating: value.rating.get(),
            is_active: value.is_active,
            category_id: value.category_id.get(),
        }
    }
}

/// Acknowledgement body returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction: &'static str,
}

/// Error body mirroring the `{"detail": ...}` shape of the HTTP surface.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
