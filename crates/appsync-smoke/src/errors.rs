use apollo_compiler::{ast::Document, validation::WithErrors};
use reqwest::header::InvalidHeaderValue;

/// An error in one of the fixed GraphQL documents
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("Could not parse GraphQL document: {0}")]
    GraphQLDocument(Box<WithErrors<Document>>),

    #[error("No operations defined")]
    NoOperations,

    #[error("Too many operations. Expected 1 but got {0}")]
    TooManyOperations(usize),

    #[error("Variables do not match the operation. Declared {declared:?} but got {provided:?}")]
    VariableMismatch {
        declared: Vec<String>,
        provided: Vec<String>,
    },
}

/// An error that stops the smoke run
#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    #[error("APPSYNC_ENDPOINT is required")]
    MissingEndpoint,

    #[error("invalid APPSYNC_ENDPOINT: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    HeaderValue(#[from] InvalidHeaderValue),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("Failed to send GraphQL request: {0}")]
    Transport(reqwest::Error),

    #[error("Could not serialize GraphQL request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not write report: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Operation(#[from] OperationError),
}
