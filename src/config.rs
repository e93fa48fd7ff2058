// config.rs - Database connection parameters from the environment
//
// Every logical setting can be supplied under two variable names: the
// short form (DB_USERNAME, ...) used by CI, and the dbmasta_-prefixed
// form the library's own .env files use. The short form wins when both
// are present. Port is the only optional setting and defaults to the
// MySQL standard 3306.

use std::env;

use crate::error::ConfigError;

/// Candidate variable names per setting, checked in priority order.
pub const ENV_USERNAME: [&str; 2] = ["DB_USERNAME", "dbmasta_username"];
pub const ENV_PASSWORD: [&str; 2] = ["DB_PASSWORD", "dbmasta_password"];
pub const ENV_HOST: [&str; 2] = ["DB_HOST", "dbmasta_host"];
pub const ENV_DATABASE: [&str; 2] = ["DB_DATABASE", "dbmasta_default"];
pub const ENV_PORT: [&str; 2] = ["DB_PORT", "dbmasta_port"];

pub const DEFAULT_PORT: u16 = 3306;

/// Everything needed to reach the test database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub username: String,
    pub password: String,
    pub host: String,
    pub database: String,
    pub port: u16,
}

impl ConnectionParams {
    /// Resolve parameters from the process environment (honoring a .env
    /// file if one is present).
    ///
    /// Returns `Ok(None)` when any required setting is missing. Callers
    /// treat that as "no database configured" and skip, rather than fail,
    /// their database-dependent work.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        dotenv::dotenv().ok();
        Self::resolve(|name| env::var(name).ok())
    }

    /// Resolve parameters through an arbitrary lookup function.
    ///
    /// The lookup is injected so the priority and defaulting rules can be
    /// tested without touching the process environment. An empty value is
    /// treated the same as an unset one, so a blank `DB_HOST=` in a .env
    /// file still falls through to `dbmasta_host`.
    pub fn resolve<F>(get: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| get(name).filter(|value| !value.is_empty()))
        };

        let username = lookup(&ENV_USERNAME);
        let password = lookup(&ENV_PASSWORD);
        let host = lookup(&ENV_HOST);
        let database = lookup(&ENV_DATABASE);

        let (Some(username), Some(password), Some(host), Some(database)) =
            (username, password, host, database)
        else {
            return Ok(None);
        };

        let port = match lookup(&ENV_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|source| ConfigError::InvalidPort {
                value: raw.clone(),
                source,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Some(Self {
            username,
            password,
            host,
            database,
            port,
        }))
    }
}
