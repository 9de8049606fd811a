//! fraxtal-addresses: look up, export and check the Fraxtal testnet address book.

mod cmd;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    // Logs go to stderr so that stdout stays machine-readable.
    // Default level is info, can be overridden with RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cmd::FraxtalAddresses::parse();
    args.cmd.run()
}
