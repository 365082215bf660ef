//! Top level sequence: send the payload once and print what happened.

use std::error::Error as StdError;
use std::io::Write;

/// Sends the payload and prints the outcome.
///
/// The success or failure message is written as a single line to `out`. When the
/// endpoint cannot be reached, the error and its causes are written to `err`.
/// Nothing is propagated to the caller.
pub async fn run<O: Write, E: Write>(
    client: &crate::Client,
    payload: &crate::IpPayload,
    out: &mut O,
    err: &mut E,
) {
    let written = match client.send_data(payload).await {
        Ok(outcome) => writeln!(out, "{outcome}"),
        Err(error) => write_trace(err, &error),
    };
    if let Err(io_error) = written {
        tracing::error!(error = %io_error, "unable to write report");
    }
}

/// Writes the error followed by one `Caused by:` line per source.
pub fn write_trace<E: Write>(err: &mut E, error: &crate::Error) -> std::io::Result<()> {
    writeln!(err, "Error: {error}")?;
    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(err, "Caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}
