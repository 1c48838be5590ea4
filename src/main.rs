mod cli;
mod db;
mod earnings;
mod names;
mod periods;
mod seed;
mod types;

use clap::Parser;
use env_logger::Env;
use log::error;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli_opts = cli::Cli::parse();
    if let Err(err) = cli::run(cli_opts) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
