use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{
    ImageUrl, ProductDescription, ProductName, ProductPrice, ProductRating, Slug, StockCount,
    TypeConstraintError,
};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
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

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            slug: Slug::new(product.slug)?,
            description: ProductDescription::new(product.description)?,
            price: ProductPrice::new(product.price)?,
            image_url: ImageUrl::new(product.image_url)?,
            stock: StockCount::new(product.stock)?,
            rating: ProductRating::new(product.rating)?,
            is_active: product.is_active,
            category_id: product.category_id.try_into()?,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description.into_inner(),
            price: product.price.get(),
            image_url: product.image_url.into_inner(),
            stock: product.stock.get(),
            // New products always start unrated and active.
            rating: 0.0,
            is_active: true,
            category_id: product.category_id.get(),
        }
    }
}
