//! Binary: `wishbot run [--mode polling|webhook]`.

use anyhow::Result;
use clap::Parser;
use wishbot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, mode, addr } => {
            let config = load_config(token, addr)?;
            run_bot(config, mode).await
        }
    }
}
