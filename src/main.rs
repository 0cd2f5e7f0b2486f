use clap::Parser;
use tipster::adapter::inbound::cli::{self, command::Cli, output};

/// Exit code for a failed command.
const EXIT_FAILURE: i32 = 1;
/// Exit code when configuration or credentials prevent starting at all.
const EXIT_STARTUP_FAILURE: i32 = 2;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = cli::dispatch::execute(cli).await {
        output::error(&e.to_string());
        let code = if e.is_startup_failure() {
            EXIT_STARTUP_FAILURE
        } else {
            EXIT_FAILURE
        };
        std::process::exit(code);
    }
}
