// db.rs - Connection pool acquisition
//
// This module only obtains the pooled MySQL client the fixtures and tests
// run against; it implements no query logic of its own.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use crate::config::ConnectionParams;

/// Create a MySQL connection pool for the configured test database.
///
/// The acquire timeout bounds how long we wait on the database before a
/// test errors out; everything past the connection step runs unbounded.
pub async fn connect_pool(params: &ConnectionParams) -> Result<MySqlPool, sqlx::Error> {
    let options = MySqlConnectOptions::new()
        .host(&params.host)
        .port(params.port)
        .username(&params.username)
        .password(&params.password)
        .database(&params.database);

    tracing::debug!(
        host = %params.host,
        port = params.port,
        database = %params.database,
        "connecting to test database"
    );

    MySqlPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(options)
        .await
}
