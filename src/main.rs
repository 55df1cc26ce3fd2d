mod cli;
mod commands;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    sfi::logging::init_logging(cli.verbose);

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("error[{}]: {err}", err.code());
        std::process::exit(1);
    }
}
