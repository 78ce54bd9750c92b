//! Endpoint newtype
//!
//! This module defines a simple newtype around a Url for demarking the GraphQL
//! endpoint under test. Parsing treats a blank value the same as a missing one.

use std::ops::Deref;
use std::str::FromStr;

use appsync_smoke::errors::SmokeError;
use url::Url;

/// A GraphQL endpoint
#[derive(Debug)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Unwrap the endpoint into its inner URL
    pub fn into_inner(self) -> Url {
        self.0
    }
}

impl FromStr for Endpoint {
    type Err = SmokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SmokeError::MissingEndpoint);
        }
        Ok(Self(Url::parse(s)?))
    }
}

impl Deref for Endpoint {
    type Target = Url;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_an_appsync_url() {
        let endpoint: Endpoint =
            "https://example.appsync-api.ap-northeast-1.amazonaws.com/graphql"
                .parse()
                .unwrap();

        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.path(), "/graphql");
    }

    #[test]
    fn it_rejects_an_empty_endpoint() {
        assert!(matches!(
            "".parse::<Endpoint>(),
            Err(SmokeError::MissingEndpoint)
        ));
    }

    #[test]
    fn it_rejects_a_relative_endpoint() {
        let error = "/graphql".parse::<Endpoint>().unwrap_err();

        assert!(matches!(error, SmokeError::InvalidEndpoint(_)));
        assert_eq!(
            error.to_string(),
            "invalid APPSYNC_ENDPOINT: relative URL without a base"
        );
    }
}
