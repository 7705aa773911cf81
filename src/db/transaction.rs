// src/db/transaction.rs
//
// Unit-of-work helpers
//
// Every service operation runs inside exactly one of these. A closure that
// returns Err leaves nothing behind: the transaction is dropped uncommitted and
// rusqlite rolls it back.

use rusqlite::{Connection, TransactionBehavior};

use crate::db::connection::{get_connection, ConnectionPool};
use crate::error::AppResult;

/// Run `f` in a deferred transaction with writes disabled
pub fn read_only<T, F>(pool: &ConnectionPool, f: F) -> AppResult<T>
where
    F: FnOnce(&Connection) -> AppResult<T>,
{
    let mut conn = get_connection(pool)?;
    conn.pragma_update(None, "query_only", true)?;

    let result = run_in_transaction(&mut conn, TransactionBehavior::Deferred, f);

    // Pooled connections are reused, so always hand them back writable
    conn.pragma_update(None, "query_only", false)?;
    result
}

/// Run `f` in an immediate (write-locking) transaction
pub fn read_write<T, F>(pool: &ConnectionPool, f: F) -> AppResult<T>
where
    F: FnOnce(&Connection) -> AppResult<T>,
{
    let mut conn = get_connection(pool)?;
    run_in_transaction(&mut conn, TransactionBehavior::Immediate, f)
}

fn run_in_transaction<T, F>(
    conn: &mut Connection,
    behavior: TransactionBehavior,
    f: F,
) -> AppResult<T>
where
    F: FnOnce(&Connection) -> AppResult<T>,
{
    let tx = conn.transaction_with_behavior(behavior)?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
