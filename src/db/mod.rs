// src/db/mod.rs
//
// Database layer - pooled SQLite access and schema management

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_connection_pool_at, create_test_connection, get_connection,
    get_database_path, ConnectionPool, PooledConn,
};
pub use migrations::{initialize_database, verify_database_integrity};
