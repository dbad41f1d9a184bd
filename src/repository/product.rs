use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::Slug;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(categories) = &query.categories {
            let ids: Vec<i32> = categories.iter().map(|id| id.get()).collect();
            items = items.filter(products::category_id.eq_any(ids));
        }

        if query.visible_only {
            items = items
                .filter(products::is_active.eq(true))
                .filter(products::stock.gt(0));
        }

        let items = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::slug.eq(slug.as_str()))
            .order(products::id.asc())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let affected = diesel::insert_into(products::table)
            .values(db_product)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_product(&self, slug: &Slug, update: &ProductUpdate) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected =
            diesel::update(products::table.filter(products::slug.eq(slug.as_str())))
                .set((
                    products::name.eq(update.name.as_str()),
                    products::description.eq(update.description.as_str()),
                    products::price.eq(update.price.get()),
                    products::stock.eq(update.stock.get()),
                    products::category_id.eq(update.category_id.get()),
                    products::updated_at.eq(diesel::dsl::now),
                ))
                .execute(&mut conn)?;

        Ok(affected)
    }

    fn deactivate_product(&self, slug: &Slug) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected =
            diesel::update(products::table.filter(products::slug.eq(slug.as_str())))
                .set((
                    products::is_active.eq(false),
                    products::updated_at.eq(diesel::dsl::now),
                ))
                .execute(&mut conn)?;

        Ok(affected)
    }
}
