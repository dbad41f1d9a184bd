use std::cell::RefCell;

use chrono::Utc;

use crate::domain::category::Category;
use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::{CategoryId, ProductId, ProductRating, Slug};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, ProductListQuery, ProductReader, ProductWriter};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    categories: Vec<Category>,
    products: RefCell<Vec<Product>>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products: RefCell::new(products),
        }
    }

    fn next_product_id(products: &[Product]) -> i32 {
        products.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        let mut items: Vec<Product> = self.products.borrow().clone();
        if let Some(categories) = &query.categories {
            items.retain(|p| categories.contains(&p.category_id));
        }
        if query.visible_only {
            items.retain(Product::is_visible);
        }
        items.sort_by_key(|p| p.id);
        Ok(items)
    }

    fn get_product_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Product>> {
        Ok(self
            .products
            .borrow()
            .iter()
            .find(|p| p.slug == *slug)
            .cloned())
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<usize> {
        let mut products = self.products.borrow_mut();
        let id = ProductId::new(Self::next_product_id(&products)).expect("positive id");
        let now = Utc::now().naive_utc();
        products.push(Product {
            id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            stock: product.stock,
            rating: ProductRating::new(0.0).expect("zero rating"),
            is_active: true,
            category_id: product.category_id,
            created_at: now,
            updated_at: now,
        });
        Ok(1)
    }

    fn update_product(&self, slug: &Slug, update: &ProductUpdate) -> RepositoryResult<usize> {
        let mut products = self.products.borrow_mut();
        let Some(product) = products.iter_mut().find(|p| p.slug == *slug) else {
            return Ok(0);
        };
        product.name = update.name.clone();
        product.description = update.description.clone();
        product.price = update.price;
        product.stock = update.stock;
        product.category_id = update.category_id;
        product.updated_at = Utc::now().naive_utc();
        Ok(1)
    }

    fn deactivate_product(&self, slug: &Slug) -> RepositoryResult<usize> {
        let mut products = self.products.borrow_mut();
        let Some(product) = products.iter_mut().find(|p| p.slug == *slug) else {
            return Ok(0);
        };
        product.is_active = false;
        product.updated_at = Utc::now().naive_utc();
        Ok(1)
    }
}

impl CategoryReader for TestRepository {
    fn get_category_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.slug == *slug).cloned())
    }

    fn list_subcategories(&self, parent_id: CategoryId) -> RepositoryResult<Vec<Category>> {
        Ok(self
            .categories
            .iter()
            .filter(|c| c.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }
}
