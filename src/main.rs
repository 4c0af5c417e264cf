//! CLI entry point for the Qwirkle grid console

use clap::Parser;
use qwirkle::io::cli::{Cli, Console};

fn main() -> qwirkle::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::from_cli(&cli, stdin.lock(), stdout.lock())?;
    console.run()
}
