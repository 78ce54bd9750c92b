//! Sequential execution of the smoke cases

use std::io::Write;

use tracing::{error, info};

use crate::errors::SmokeError;
use crate::graphql::{Client, Response};
use crate::operations::PublishCase;
use crate::report;

/// Run the cases one after another, stopping at the first error.
///
/// GraphQL errors in a response body are printed like any other body and do
/// not stop the run.
pub async fn run(
    client: &Client,
    cases: &[PublishCase],
    out: &mut impl Write,
) -> Result<(), SmokeError> {
    info!(endpoint = %client.endpoint(), cases = cases.len(), "Starting smoke run");
    for case in cases {
        run_case(client, *case, out).await?;
    }
    Ok(())
}

/// Send a single case and print its outcome
pub async fn run_case(
    client: &Client,
    case: PublishCase,
    out: &mut impl Write,
) -> Result<Response, SmokeError> {
    let request = case.request()?;
    report::banner(out, case.description())?;

    let response = client
        .send(&request)
        .await
        .inspect_err(|e| error!(?case, "{e}"))?;

    report::response(out, &response)?;
    info!(?case, status = %response.status, "Smoke case completed");
    Ok(response)
}
