//! Helpers for integration tests.

use chrono::Utc;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use storefront_catalog::db::{DbPool, establish_connection_pool};
use storefront_catalog::domain::category::NewCategory;
use storefront_catalog::domain::types::{CategoryId, CategoryName, Slug};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Build an insertable category for seeding reference data.
#[allow(dead_code)]
pub fn new_category(name: &str, slug: &str, parent_id: Option<i32>) -> NewCategory {
    let now = Utc::now().naive_utc();
    NewCategory {
        name: CategoryName::new(name).expect("valid category name"),
        slug: Slug::new(slug).expect("valid category slug"),
        parent_id: parent_id.map(|id| CategoryId::new(id).expect("valid category id")),
        created_at: now,
        updated_at: now,
    }
}
