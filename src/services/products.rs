//! Catalog query service: product visibility, category-tree expansion and
//! slug resolution, independent of transport.

use crate::domain::types::Slug;
use crate::dto::products::ProductDto;
use crate::forms::products::{CreateProductPayload, UpdateProductPayload};
use crate::repository::{CategoryReader, ProductListQuery, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Insert a new product with a slug derived from its name.
///
/// Rating starts at 0.0 and the product starts active; both are set by the
/// persistence layer, not the caller.
pub fn create_product<R>(payload: CreateProductPayload, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let new_product = payload.into_new_product()?;

    match repo.create_product(&new_product) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List every visible product: active and in stock, id ascending.
///
/// An empty catalog yields an empty list, not an error.
pub fn list_active_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products(ProductListQuery::default().visible()) {
        Ok(products) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List visible products belonging to the category with the given slug or to
/// any of its immediate children.
///
/// The closure is intentionally shallow: grandchildren are not traversed.
pub fn list_by_category<R>(category_slug: &str, repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: CategoryReader + ProductReader,
{
    let slug = match Slug::new(category_slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let category = match repo.get_category_by_slug(&slug) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let subcategories = match repo.list_subcategories(category.id) {
        Ok(subcategories) => subcategories,
        Err(e) => {
            log::error!("Failed to list subcategories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let mut closure = vec![category.id];
    closure.extend(subcategories.into_iter().map(|c| c.id));

    match repo.list_products(ProductListQuery::default().categories(closure).visible()) {
        Ok(products) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products by category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Resolve a product by its slug.
///
/// Visibility filtering deliberately does not apply here: deactivated and
/// out-of-stock products remain retrievable by direct slug lookup.
pub fn get_by_slug<R>(product_slug: &str, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let slug = match Slug::new(product_slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_slug(&slug) {
        Ok(Some(product)) => Ok(product.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite the mutable attributes of the product with the given slug.
///
/// The slug itself is never recomputed, even when the name changes, so the
/// external identity can diverge from the name. Rating and active flag also
/// survive untouched.
pub fn update_product<R>(
    product_slug: &str,
    payload: UpdateProductPayload,
    repo: &R,
) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    let slug = match Slug::new(product_slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_slug(&slug) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.update_product(&slug, &payload.into_update()) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Soft-delete the product with the given slug by clearing its active flag.
///
/// The row is retained, so the operation is idempotent: a second call finds
/// the row and succeeds again.
pub fn soft_delete_product<R>(product_slug: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    let slug = match Slug::new(product_slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_slug(&slug) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.deactivate_product(&slug) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to deactivate product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::product::Product;
    use crate::domain::types::{
        CategoryId, CategoryName, ImageUrl, ProductDescription, ProductId, ProductName,
        ProductPrice, ProductRating, StockCount,
    };
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category(id: i32, slug: &str, parent_id: Option<i32>) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(slug).unwrap(),
            slug: Slug::new(slug).unwrap(),
            parent_id: parent_id.map(|id| CategoryId::new(id).unwrap()),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn sample_product(id: i32, slug: &str, category_id: i32, stock: i32) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(slug).unwrap(),
            slug: Slug::new(slug).unwrap(),
            description: ProductDescription::new("description").unwrap(),
            price: ProductPrice::new(9.99).unwrap(),
            image_url: ImageUrl::new("https://example.com/img.jpg").unwrap(),
            stock: StockCount::new(stock).unwrap(),
            rating: ProductRating::new(0.0).unwrap(),
            is_active: true,
            category_id: CategoryId::new(category_id).unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn create_payload(name: &str) -> CreateProductPayload {
        CreateProductPayload {
            name: ProductName::new(name).unwrap(),
            description: ProductDescription::new("description").unwrap(),
            price: ProductPrice::new(49.0).unwrap(),
            image_url: ImageUrl::new("https://example.com/shoes.jpg").unwrap(),
            stock: StockCount::new(5).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
        }
    }

    #[test]
    fn listing_contains_only_active_products_in_stock() {
        let hidden = sample_product(2, "sold-out", 1, 0);
        let mut inactive = sample_product(3, "retired", 1, 5);
        inactive.is_active = false;

        let repo = TestRepository::new(
            vec![sample_category(1, "shoes", None)],
            vec![sample_product(1, "red-shoes", 1, 5), hidden, inactive],
        );

        let products = list_active_products(&repo).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].slug, "red-shoes");
    }

    #[test]
    fn empty_catalog_lists_as_empty_not_error() {
        let repo = TestRepository::new(vec![], vec![]);

        assert!(list_active_products(&repo).unwrap().is_empty());
    }

    #[test]
    fn unknown_category_slug_is_not_found() {
        let repo = TestRepository::new(vec![sample_category(1, "shoes", None)], vec![]);

        assert_eq!(
            list_by_category("garden", &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn category_listing_includes_direct_children_but_not_grandchildren() {
        let repo = TestRepository::new(
            vec![
                sample_category(1, "clothing", None),
                sample_category(2, "shoes", Some(1)),
                sample_category(3, "sneakers", Some(2)),
            ],
            vec![
                sample_product(1, "jacket", 1, 5),
                sample_product(2, "red-shoes", 2, 5),
                sample_product(3, "air-runner", 3, 5),
            ],
        );

        let products = list_by_category("clothing", &repo).unwrap();

        let slugs: Vec<&str> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["jacket", "red-shoes"]);
    }

    #[test]
    fn category_listing_filters_hidden_products() {
        let mut inactive = sample_product(2, "retired", 1, 5);
        inactive.is_active = false;

        let repo = TestRepository::new(
            vec![sample_category(1, "shoes", None)],
            vec![sample_product(1, "red-shoes", 1, 5), inactive],
        );

        let products = list_by_category("shoes", &repo).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].slug, "red-shoes");
    }

    #[test]
    fn slug_lookup_ignores_visibility() {
        let mut inactive = sample_product(1, "retired", 1, 0);
        inactive.is_active = false;

        let repo = TestRepository::new(vec![sample_category(1, "shoes", None)], vec![inactive]);

        let product = get_by_slug("retired", &repo).unwrap();

        assert_eq!(product.slug, "retired");
        assert!(!product.is_active);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn unknown_product_slug_is_not_found() {
        let repo = TestRepository::new(vec![], vec![]);

        assert_eq!(
            get_by_slug("red-shoes", &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn created_product_is_retrievable_by_derived_slug() {
        let repo = TestRepository::new(vec![sample_category(1, "shoes", None)], vec![]);

        create_product(create_payload("Red Shoes"), &repo).unwrap();

        let product = get_by_slug("red-shoes", &repo).unwrap();
        assert_eq!(product.slug, "red-shoes");
        assert_eq!(product.name, "Red Shoes");
        assert_eq!(product.rating, 0.0);
        assert!(product.is_active);
    }

    #[test]
    fn update_changes_name_but_keeps_slug() {
        let repo = TestRepository::new(
            vec![sample_category(1, "shoes", None)],
            vec![sample_product(1, "red-shoes", 1, 5)],
        );

        let payload = UpdateProductPayload {
            name: ProductName::new("Crimson Shoes").unwrap(),
            description: ProductDescription::new("updated").unwrap(),
            price: ProductPrice::new(59.0).unwrap(),
            stock: StockCount::new(3).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
        };
        update_product("red-shoes", payload, &repo).unwrap();

        let product = get_by_slug("red-shoes", &repo).unwrap();
        assert_eq!(product.name, "Crimson Shoes");
        assert_eq!(product.slug, "red-shoes");
        assert_eq!(product.stock, 3);
        assert!(product.is_active);
    }

    #[test]
    fn update_of_unknown_product_is_not_found() {
        let repo = TestRepository::new(vec![], vec![]);

        let payload = UpdateProductPayload {
            name: ProductName::new("Crimson Shoes").unwrap(),
            description: ProductDescription::new("updated").unwrap(),
            price: ProductPrice::new(59.0).unwrap(),
            stock: StockCount::new(3).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
        };

        assert_eq!(
            update_product("red-shoes", payload, &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn soft_delete_hides_from_listing_but_keeps_slug_lookup() {
        let repo = TestRepository::new(
            vec![sample_category(1, "shoes", None)],
            vec![sample_product(1, "red-shoes", 1, 5)],
        );

        soft_delete_product("red-shoes", &repo).unwrap();

        assert!(list_active_products(&repo).unwrap().is_empty());
        let product = get_by_slug("red-shoes", &repo).unwrap();
        assert!(!product.is_active);
    }

    #[test]
    fn soft_delete_is_idempotent() {
        let repo = TestRepository::new(
            vec![sample_category(1, "shoes", None)],
            vec![sample_product(1, "red-shoes", 1, 5)],
        );

        soft_delete_product("red-shoes", &repo).unwrap();
        soft_delete_product("red-shoes", &repo).unwrap();

        assert!(!get_by_slug("red-shoes", &repo).unwrap().is_active);
    }

    #[test]
    fn soft_delete_of_unknown_product_is_not_found() {
        let repo = TestRepository::new(vec![], vec![]);

        assert_eq!(
            soft_delete_product("red-shoes", &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
