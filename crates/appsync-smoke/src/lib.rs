pub mod errors;
pub mod graphql;
pub mod operations;
pub mod report;
pub mod runner;
