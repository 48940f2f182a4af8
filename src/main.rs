use anyhow::Result;
use clap::Parser;

use credential_digest::cli::{self, Cli};
use credential_digest::ProviderRegistry;

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let registry = ProviderRegistry::with_defaults();
    let output = cli::run(&args, &registry, std::io::stdin().lock())?;
    println!("{output}");
    Ok(())
}
