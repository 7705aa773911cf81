// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Transaction boundaries for service operations

pub mod connection;
pub mod migrations;
pub mod transaction;

pub use connection::{
    create_connection_pool, create_memory_pool, get_connection, register_functions,
    ConnectionPool, PooledConn,
};

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};

pub use transaction::{read_only, read_write};
