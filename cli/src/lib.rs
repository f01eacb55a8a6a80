use clap::Parser;
use env_logger::Env;

mod cli;
mod error;

type Result<T> = std::result::Result<T, error::Error>;

pub fn run() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    cli.run();
}
