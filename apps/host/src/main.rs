//! # Launcher Host Entry Point
//!
//! Runs one open + resume cycle and prints any dialog to present as a JSON
//! line on stdout. Logs go to stderr.

#[tokio::main]
async fn main() {
    if let Err(err) = launcher_host::run().await {
        tracing::error!(error = %err, "Launcher host failed");
        eprintln!("launcher-host: {err}");
        std::process::exit(1);
    }
}
