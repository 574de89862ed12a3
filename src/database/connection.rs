use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::settings::DatabaseSettings;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let manager = build_manager(settings);
    build_pool(manager, settings.pool_size)
}

fn build_manager(settings: &DatabaseSettings) -> SqliteConnectionManager {
    let busy_timeout = settings.busy_timeout();
    SqliteConnectionManager::file(&settings.path).with_init(move |conn| {
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
