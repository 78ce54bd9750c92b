//! Binary-only helpers: configuration loading and logging setup

mod config;
mod endpoint;
mod logging;

use std::path::Path;

pub use config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
pub use logging::setup_logging;

/// Separator to use when drilling down into nested options in the env figment
const ENV_NESTED_SEPARATOR: &str = "__";

/// Read configuration from environment variables only (when no config file is provided)
#[allow(clippy::result_large_err)]
pub fn read_config_from_env() -> Result<Config, figment::Error> {
    Figment::new()
        .join(Env::prefixed("APPSYNC_").split(ENV_NESTED_SEPARATOR))
        .extract()
}

/// Read in a config from a YAML file, filling in any missing values from the environment
#[allow(clippy::result_large_err)]
pub fn read_config(yaml_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
    Figment::new()
        .join(Env::prefixed("APPSYNC_").split(ENV_NESTED_SEPARATOR))
        .join(Yaml::file(yaml_path))
        .extract()
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use appsync_smoke::errors::SmokeError;
    use tracing::Level;

    use super::{read_config, read_config_from_env};

    #[test]
    fn it_prioritizes_env_vars() {
        let config = r#"
            endpoint: http://from_file:4000/graphql
        "#;

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";
            let endpoint = "https://from_env.appsync-api.ap-northeast-1.amazonaws.com/graphql";

            jail.create_file(path, config)?;
            jail.set_env("APPSYNC_ENDPOINT", endpoint);

            let config = read_config(path)?;

            assert_eq!(config.endpoint.as_deref(), Some(endpoint));
            Ok(())
        });
    }

    #[test]
    fn it_extracts_nested_env() {
        let config = r#"
            logging:
                level: warn
        "#;

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";

            jail.create_file(path, config)?;
            jail.set_env("APPSYNC_LOGGING__LEVEL", "debug");

            let config = read_config(path)?;

            assert_eq!(config.logging.level, Level::DEBUG);
            Ok(())
        });
    }

    #[test]
    fn it_merges_env_and_file() {
        let config = "
            endpoint: http://from_file:4000/graphql
            timeout: 5s
            headers:
                x-api-key: abc
        ";

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";

            jail.create_file(path, config)?;
            jail.set_env("APPSYNC_AUTH_TOKEN", "from-env");

            let config = read_config(path)?;

            assert_eq!(config.endpoint.as_deref(), Some("http://from_file:4000/graphql"));
            assert_eq!(config.auth_token, "from-env");
            assert_eq!(config.timeout, Some(Duration::from_secs(5)));
            assert_eq!(
                config.headers.get("x-api-key").map(|value| value.as_bytes()),
                Some(b"abc".as_slice())
            );
            Ok(())
        });
    }

    #[test]
    fn it_reads_endpoint_from_env_only() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APPSYNC_ENDPOINT", "http://localhost:20002/graphql");

            let config = read_config_from_env()?;

            assert_eq!(
                config.endpoint().map(|endpoint| endpoint.to_string()).ok(),
                Some("http://localhost:20002/graphql".to_string())
            );
            assert_eq!(config.auth_token, "aaaa");
            assert!(config.timeout.is_none());
            Ok(())
        });
    }

    #[test]
    fn it_requires_an_endpoint() {
        figment::Jail::expect_with(|_jail| {
            let config = read_config_from_env()?;

            let error = config.endpoint().unwrap_err();
            assert!(matches!(error, SmokeError::MissingEndpoint));
            assert_eq!(error.to_string(), "APPSYNC_ENDPOINT is required");
            Ok(())
        });
    }

    #[test]
    fn it_treats_blank_endpoint_as_missing() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APPSYNC_ENDPOINT", "  ");

            let config = read_config_from_env()?;

            assert!(matches!(config.endpoint(), Err(SmokeError::MissingEndpoint)));
            Ok(())
        });
    }

    #[test]
    fn it_ignores_unprefixed_auth_token() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("AUTH_TOKEN", "Bearer unrelated-ci-secret");

            let config = read_config_from_env()?;

            assert_eq!(config.auth_token, "aaaa");
            Ok(())
        });
    }

    #[test]
    fn it_accepts_numeric_auth_token() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APPSYNC_ENDPOINT", "http://localhost:1/graphql");
            jail.set_env("APPSYNC_AUTH_TOKEN", "1234");

            let config = read_config_from_env()?;

            assert_eq!(config.auth_token, "1234");
            assert!(config.endpoint().is_ok());
            Ok(())
        });
    }
}
