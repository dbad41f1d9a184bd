//! SQLite connection pooling shared by the repository layer.

use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Connection pool handed to request handlers via `web::Data`.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A single pooled SQLite connection.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build an r2d2 connection pool for the SQLite database at `database_url`.
///
/// Connections are returned to the pool when the guard is dropped, on every
/// exit path.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
