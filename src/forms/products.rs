use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, ProductUpdate};
use crate::domain::types::{
    CategoryId, ImageUrl, ProductDescription, ProductName, ProductPrice, Slug, StockCount,
    TypeConstraintError,
};
use crate::slug::slugify;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(url)]
    pub image_url: String,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(range(min = 1))]
    pub category: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductPayload {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub image_url: ImageUrl,
    pub stock: StockCount,
    pub category_id: CategoryId,
}

impl CreateProductPayload {
    /// Build the insertable product, deriving its slug from the name.
    pub fn into_new_product(self) -> Result<NewProduct, TypeConstraintError> {
        let slug = Slug::new(slugify(self.name.as_str()))?;
        Ok(NewProduct {
            name: self.name,
            slug,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            stock: self.stock,
            category_id: self.category_id,
        })
    }
}

#[derive(Debug, Error)]
pub enum CreateProductFormError {
    #[error("Create product form validation failed: {0}")]
    Validation(String),
    #[error("Create product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateProductForm> for CreateProductPayload {
    type Error = CreateProductFormError;

    fn try_from(value: CreateProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: ProductName::new(value.name)?,
            description: ProductDescription::new(value.description)?,
            price: ProductPrice::new(value.price)?,
            image_url: ImageUrl::new(value.image_url)?,
            stock: StockCount::new(value.stock)?,
            category_id: CategoryId::new(value.category)?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductPayload {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub stock: StockCount,
    pub category_id: CategoryId,
}

impl UpdateProductPayload {
    /// Build the attribute overwrite. Slug, rating and active flag are not
    /// part of an update.
    pub fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateProductFormError {
    #[error("Update product form validation failed: {0}")]
    Validation(String),
    #[error("Update product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateProductForm> for UpdateProductPayload {
    type Error = UpdateProductFormError;

    fn try_from(value: UpdateProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: ProductName::new(value.name)?,
            description: ProductDescription::new(value.description)?,
            price: ProductPrice::new(value.price)?,
            stock: StockCount::new(value.stock)?,
            category_id: CategoryId::new(value.category_id)?,
        })
    }
}
