pub mod connection;
pub mod events;
pub mod models;
pub mod players;
pub mod results;
pub mod setup;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;

#[cfg(test)]
pub(crate) fn test_connection() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().expect("in-memory database");
    setup::init_schema(&conn).expect("schema");
    conn
}
