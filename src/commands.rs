use crate::cli::{Cli, Command};
use sfi::config::SfiConfig;
use sfi::Result;

pub mod import;
pub mod list;
pub mod parse;
pub mod types;

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = SfiConfig::locate(cli.config.as_deref())?;

    match cli.command {
        Command::List(args) => list::run(args, &config),
        Command::Parse(args) => parse::run(args, &config),
        Command::Import(args) => import::run(args, &config),
        Command::Types(args) => types::run(args, &config),
    }
}
