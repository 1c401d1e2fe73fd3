mod catalog;
mod cli;
mod commands;
mod env;
mod error;
mod filter;
mod hub;
mod logging;
mod nav;
mod output;
mod page;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    // browse は TUI 用に自前で初期化する
    if !matches!(cli.command, cli::Command::Browse(_)) {
        logging::init(logging::LogMode::Cli);
    }

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
