use ercli::commands::{create_cli_commands, PARAMETER_VERBOSE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::execute_command;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = create_cli_commands();

    // RUST_LOG wins; otherwise --verbose turns on debug output
    let default_level = if matches.get_flag(PARAMETER_VERBOSE) {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute_command(&matches).await {
        let exit_code = e.exit_code();
        debug!("Exiting with {} ({})", exit_code.code(), exit_code.message());
        eprintln!("ERROR: {}", e);
        ::std::process::exit(exit_code.code());
    }
}
