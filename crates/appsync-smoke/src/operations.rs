//! The fixed `publishMessage` mutations exercised by the smoke run
//!
//! All three documents target the same mutation. They only differ in which
//! parameter convention they use to identify the conversation:
//!
//! * client-owner: `tenantID`, `propertyID` and `orderID`, from which the
//!   service derives `shareId` as `tenantID:propertyID:orderID`
//! * owner: an explicit `shareId` plus an optional `constructionID`
//! * owner-simple: an explicit `shareId` only

use apollo_compiler::Node;
use apollo_compiler::ast::{Definition, OperationDefinition};
use apollo_compiler::parser::Parser;
use serde_json::{Map, Value, json};

use crate::errors::OperationError;
use crate::graphql::Request;

pub const PUBLISH_CLIENT_OWNER: &str = r#"
mutation PublishMessage($content: String!, $sender: String!, $tenantID: Int!, $propertyID: Int!, $orderID: Int!) {
  publishMessage(content: $content, sender: $sender, tenantID: $tenantID, propertyID: $propertyID, orderID: $orderID) {
    id
    content
    sender
    shareId
    createdAt
    tenantID
    propertyID
    orderID
    constructionID
  }
}
"#;

pub const PUBLISH_OWNER: &str = r#"
mutation PublishMessage($content: String!, $sender: String!, $shareId: String!, $constructionID: String) {
  publishMessage(content: $content, sender: $sender, shareId: $shareId, constructionID: $constructionID) {
    id
    content
    sender
    shareId
    createdAt
    tenantID
    propertyID
    orderID
    constructionID
  }
}
"#;

pub const PUBLISH_OWNER_SIMPLE: &str = r#"
mutation PublishMessage($content: String!, $sender: String!, $shareId: String!) {
  publishMessage(content: $content, sender: $sender, shareId: $shareId) {
    id
    content
    sender
    shareId
    createdAt
    tenantID
    propertyID
    orderID
    constructionID
  }
}
"#;

/// One of the fixed smoke test call sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PublishCase {
    /// Identify the conversation by tenant, property and order
    ClientOwner,

    /// Identify the conversation by share ID, with a construction ID
    Owner,

    /// Identify the conversation by share ID only
    OwnerSimple,
}

impl PublishCase {
    /// Every case, in the order the smoke run executes them
    pub const ALL: [PublishCase; 3] = [Self::ClientOwner, Self::Owner, Self::OwnerSimple];

    pub fn description(&self) -> &'static str {
        match self {
            Self::ClientOwner => "client-owner parameters",
            Self::Owner => "owner parameters (with constructionID)",
            Self::OwnerSimple => "owner parameters (shareId only)",
        }
    }

    pub fn query(&self) -> &'static str {
        match self {
            Self::ClientOwner => PUBLISH_CLIENT_OWNER,
            Self::Owner => PUBLISH_OWNER,
            Self::OwnerSimple => PUBLISH_OWNER_SIMPLE,
        }
    }

    pub fn variables(&self) -> Map<String, Value> {
        match self {
            Self::ClientOwner => variable_map([
                ("content", json!("[client-owner] message from rust 🚀")),
                ("sender", json!("rust-client-owner")),
                ("tenantID", json!(1)),
                ("propertyID", json!(1)),
                ("orderID", json!(1)),
            ]),
            Self::Owner => variable_map([
                ("content", json!("[owner] message from rust (owner) 🚀")),
                ("sender", json!("rust-owner")),
                ("shareId", json!("8ec22adf-42d8-41dc-9f7a-87e7d1990d02")),
                ("constructionID", json!("1a9e6d41-1042-410a-acb2-28016bca3354")),
            ]),
            Self::OwnerSimple => variable_map([
                ("content", json!("[owner] message from rust 🚀")),
                ("sender", json!("7179984e-bc2b-452b-bdbb-09f4b07b88f2")),
                ("shareId", json!("room-1")),
            ]),
        }
    }

    /// Build the request body, checking the variables against the document
    pub fn request(&self) -> Result<Request<'static>, OperationError> {
        let query = self.query();
        let variables = self.variables();

        let mut declared = declared_variables(query)?;
        let mut provided: Vec<String> = variables.keys().cloned().collect();
        declared.sort();
        provided.sort();
        if declared != provided {
            return Err(OperationError::VariableMismatch { declared, provided });
        }

        Ok(Request { query, variables })
    }
}

fn variable_map<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// The variable names declared by the single operation in `source_text`, in declaration order
pub fn declared_variables(source_text: &str) -> Result<Vec<String>, OperationError> {
    Ok(single_operation(source_text)?
        .variables
        .iter()
        .map(|variable| variable.name.to_string())
        .collect())
}

fn single_operation(source_text: &str) -> Result<Node<OperationDefinition>, OperationError> {
    let document = Parser::new()
        .parse_ast(source_text, "operation.graphql")
        .map_err(|e| OperationError::GraphQLDocument(Box::new(e)))?;

    let mut operations = document.definitions.into_iter().filter_map(|def| match def {
        Definition::OperationDefinition(operation) => Some(operation),
        _ => None,
    });

    match (operations.next(), operations.next()) {
        (None, _) => Err(OperationError::NoOperations),
        (Some(_), Some(_)) => Err(OperationError::TooManyOperations(2 + operations.count())),
        (Some(operation), None) => Ok(operation),
    }
}
