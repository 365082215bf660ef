use share_data::{report, Client, IpPayload};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(share_data::logging::filter())
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    match Client::with_defaults() {
        Ok(client) => {
            report::run(&client, &IpPayload::default(), &mut stdout, &mut stderr).await;
        }
        Err(error) => {
            if let Err(io_error) = report::write_trace(&mut stderr, &error) {
                tracing::error!(error = %io_error, "unable to write report");
            }
        }
    }
}
