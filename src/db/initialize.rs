use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema::create_schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    create_schema(conn)?;
    Ok(())
}

/// Open the configured store and make sure the schema exists.
/// Every command goes through here; schema creation is idempotent.
pub fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
