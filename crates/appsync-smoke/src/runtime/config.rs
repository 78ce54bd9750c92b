use std::time::Duration;

use appsync_smoke::errors::SmokeError;
use reqwest::header::HeaderMap;
use serde::Deserialize;

use super::{endpoint::Endpoint, logging::Logging};

/// Configuration for a smoke run
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The GraphQL endpoint under test
    pub endpoint: Option<String>,

    /// Value of the `Authorization` header sent with every request
    #[serde(deserialize_with = "parsers::string_or_number")]
    pub auth_token: String,

    /// Additional hard-coded headers to include in all GraphQL requests
    #[serde(deserialize_with = "parsers::map_from_str")]
    pub headers: HeaderMap,

    /// Overall timeout of a single request. Unset means no timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,

    /// Logging configuration
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            auth_token: defaults::auth_token(),
            headers: HeaderMap::new(),
            timeout: None,
            logging: Logging::default(),
        }
    }
}

impl Config {
    /// The validated endpoint. A missing or blank endpoint is an error
    pub fn endpoint(&self) -> Result<Endpoint, SmokeError> {
        self.endpoint
            .as_deref()
            .ok_or(SmokeError::MissingEndpoint)?
            .parse()
    }
}

mod defaults {
    pub(super) fn auth_token() -> String {
        "aaaa".to_string()
    }
}

mod parsers {
    use std::collections::HashMap;

    use reqwest::header::HeaderMap;
    use serde::{Deserialize, Deserializer};

    /// Accept a string, or a number that an env provider has already parsed out of one
    pub(super) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumberVisitor;
        impl serde::de::Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or a number")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }

    pub(super) fn map_from_str<'de, D>(deserializer: D) -> Result<HeaderMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, String>::deserialize(deserializer)?;
        HeaderMap::try_from(&raw).map_err(serde::de::Error::custom)
    }
}
