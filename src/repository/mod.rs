use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::{CategoryId, Slug};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Restrict to products belonging to any of these categories.
    pub categories: Option<Vec<CategoryId>>,
    /// Restrict to visible products (active and in stock).
    pub visible_only: bool,
}

impl ProductListQuery {
    pub fn categories(mut self, categories: Vec<CategoryId>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn visible(mut self) -> Self {
        self.visible_only = true;
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query parameters, id ascending.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve the first product with the given slug, regardless of
    /// visibility.
    fn get_product_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<usize>;
    /// Overwrite the mutable attributes of the product with the given slug.
    fn update_product(&self, slug: &Slug, update: &ProductUpdate) -> RepositoryResult<usize>;
    /// Clear the active flag of the product with the given slug. The row is
    /// retained.
    fn deactivate_product(&self, slug: &Slug) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its slug.
    fn get_category_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Category>>;
    /// List the immediate children of a category.
    fn list_subcategories(&self, parent_id: CategoryId) -> RepositoryResult<Vec<Category>>;
}

/// Write operations for category entities. Categories are reference data with
/// no HTTP surface; this exists for seeding and tests.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize>;
}
