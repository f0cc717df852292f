//! gh-navigator CLI
//!
//! Browse and act on GitHub team repositories from the terminal

use clap::Parser;
use gh_navigator::cli::{Cli, Runner};
use gh_navigator::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    // Initialize logging
    if let Err(e) = logging::init(&runner.log_config()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
