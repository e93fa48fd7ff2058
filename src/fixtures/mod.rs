// fixtures/mod.rs - Test fixtures module
//
// What is a fixture?
// A fixture is reusable test setup code. Instead of writing the same table
// creation and cleanup in every test, we write it once and reuse it.
//
// The shape here is a scoped wrapper: `with_table` creates the fixture
// table, hands a pool to the test body, and drops the table again on every
// way out of the scope, including a failed assertion (panic) inside the
// body.
//
// Example: Instead of this in every test...
//   create_audit_table(&pool).await?;
//   ... test logic ...
//   drop_audit_table(&pool).await?;   // skipped if the test failed!
//
// We just write: with_audit_table(&pool, |pool| async move { ... }).await

pub mod tables;

pub use tables::{AuditRow, AuditTable, TextLimitsTable};

use std::future::Future;

use sqlx::MySqlPool;
use tokio::sync::Mutex;

use crate::error::FixtureError;

/// A simple trait that all test tables must implement
pub trait TestTable {
    /// The table's name in the configured database
    const NAME: &'static str;

    /// The SQL commands to create (and optionally seed) this table
    /// Returns a slice of SQL strings that should be executed in order
    fn setup_sql() -> &'static [&'static str];

    /// The SQL command that removes the table again
    fn drop_sql() -> String {
        format!("DROP TABLE IF EXISTS `{}`", Self::NAME)
    }
}

// Fixture tables have fixed names, so two scopes touching the same table
// from parallel test threads would see each other's setup and teardown.
// All scopes in the process serialize on this lock.
static SCOPE_LOCK: Mutex<()> = Mutex::const_new(());

/// Run `body` inside a fixture scope for table `T`.
///
/// The table is created before the body runs and dropped after it
/// completes, exactly once per scope:
///
/// - if creation fails, the body never runs and [`FixtureError::Setup`]
///   is returned;
/// - if the body returns an error, that error is returned unchanged (a
///   teardown failure on the same path is logged, not returned);
/// - if the body panics (a failed assertion), the table is still dropped
///   and the panic resumes;
/// - if only the teardown fails, [`FixtureError::Teardown`] is returned
///   so the failure is visible instead of silently swallowed.
pub async fn with_table<T, F, Fut, R>(pool: &MySqlPool, body: F) -> Result<R, FixtureError>
where
    T: TestTable,
    F: FnOnce(MySqlPool) -> Fut,
    Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
    R: Send + 'static,
{
    let _scope = SCOPE_LOCK.lock().await;

    setup::<T>(pool).await?;

    // Spawning the body lets us observe a panic as a JoinError, run the
    // teardown, and only then resume the unwind.
    let outcome = tokio::spawn(body(pool.clone())).await;
    let teardown_result = teardown::<T>(pool).await;

    match outcome {
        Ok(Ok(value)) => teardown_result.map(|()| value),
        Ok(Err(body_err)) => {
            if let Err(drop_err) = teardown_result {
                tracing::error!(
                    table = T::NAME,
                    error = %drop_err,
                    "fixture teardown failed after test failure"
                );
            }
            Err(FixtureError::Test(body_err))
        }
        Err(join_err) => {
            if let Err(drop_err) = teardown_result {
                tracing::error!(
                    table = T::NAME,
                    error = %drop_err,
                    "fixture teardown failed after test panic"
                );
            }
            match join_err.try_into_panic() {
                Ok(payload) => std::panic::resume_unwind(payload),
                Err(join_err) => Err(FixtureError::Test(anyhow::Error::new(join_err))),
            }
        }
    }
}

/// Fixture scope for the `_dbmasta_audit_test` table.
pub async fn with_audit_table<F, Fut, R>(pool: &MySqlPool, body: F) -> Result<R, FixtureError>
where
    F: FnOnce(MySqlPool) -> Fut,
    Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
    R: Send + 'static,
{
    with_table::<AuditTable, F, Fut, R>(pool, body).await
}

async fn setup<T: TestTable>(pool: &MySqlPool) -> Result<(), FixtureError> {
    tracing::debug!(table = T::NAME, "creating fixture table");
    for sql in T::setup_sql() {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|source| FixtureError::Setup {
                table: T::NAME,
                source,
            })?;
    }
    Ok(())
}

async fn teardown<T: TestTable>(pool: &MySqlPool) -> Result<(), FixtureError> {
    tracing::debug!(table = T::NAME, "dropping fixture table");
    sqlx::query(&T::drop_sql())
        .execute(pool)
        .await
        .map_err(|source| FixtureError::Teardown {
            table: T::NAME,
            source,
        })?;
    Ok(())
}
