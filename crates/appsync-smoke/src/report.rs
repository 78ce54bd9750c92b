//! Console output of a smoke run

use std::io::Write;

use crate::errors::SmokeError;
use crate::graphql::Response;

/// Announce a case before its request is sent
pub fn banner(out: &mut impl Write, description: &str) -> Result<(), SmokeError> {
    writeln!(out)?;
    writeln!(out, "=== Testing {description} ===")?;
    out.flush()?;
    Ok(())
}

/// Print the status and the pretty-printed body of a response
pub fn response(out: &mut impl Write, response: &Response) -> Result<(), SmokeError> {
    writeln!(out, "Status: {}", response.status_line())?;
    writeln!(out, "Response: {}", response.pretty_body()?)?;
    Ok(())
}
