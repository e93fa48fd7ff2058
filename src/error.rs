// error.rs - Error types for configuration and fixture lifecycle

use thiserror::Error;

/// A setting was present in the environment but unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// What went wrong inside a fixture scope.
///
/// `Setup` and `Teardown` are failures of the fixture machinery itself;
/// `Test` carries a failure of the scope's body. A teardown failure never
/// replaces a body failure: when both happen, the body failure is
/// returned and the teardown failure is logged at error level.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to create fixture table `{table}`: {source}")]
    Setup {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to drop fixture table `{table}`: {source}")]
    Teardown {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Test(#[from] anyhow::Error),
}
