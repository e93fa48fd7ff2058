// common/mod.rs - Shared test utilities
//
// Database-dependent tests call try_test_pool() first and return early
// when it yields None, so the unit-level portion of the suite runs in
// any environment.

use dbmasta_audit_tests::config::ConnectionParams;
use dbmasta_audit_tests::db;
use sqlx::MySqlPool;
use tokio::sync::{Mutex, MutexGuard};

// The fixture tables have fixed names, and several tests assert about
// table state *outside* any fixture scope. Those assertions would race
// with another test's open scope under the parallel test runner, so
// every database test in a binary holds this lock for its full duration.
static DB_TEST_LOCK: Mutex<()> = Mutex::const_new(());

pub async fn db_test_guard() -> MutexGuard<'static, ()> {
    DB_TEST_LOCK.lock().await
}

/// Connect to the configured test database.
///
/// Returns `None` when the environment holds no database configuration;
/// a configured-but-unreachable database is an error, not a skip.
pub async fn try_test_pool() -> anyhow::Result<Option<(MySqlPool, ConnectionParams)>> {
    let Some(params) = ConnectionParams::from_env()? else {
        return Ok(None);
    };
    let pool = db::connect_pool(&params).await?;
    Ok(Some((pool, params)))
}

/// Check whether `table` currently exists in `database`.
pub async fn table_exists(pool: &MySqlPool, database: &str, table: &str) -> anyhow::Result<bool> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM information_schema.tables \
         WHERE table_schema = ? AND table_name = ?",
    )
    .bind(database)
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}
