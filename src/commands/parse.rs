//! sfi parse コマンド
//!
//! ファイル名からアプリケーション名とバージョンを抽出して表示する。

use clap::Parser;
use sfi::config::SfiConfig;
use sfi::output::print_json;
use sfi::{NameVersionParser, Result};

#[derive(Debug, Parser)]
pub struct Args {
    /// Filename to parse (e.g., petclinic-2.0.ear)
    pub filename: String,

    /// Custom name/version regex (group 1: name, group 2: version)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Version used when none can be extracted (defaults to the configured version)
    #[arg(long)]
    pub default_version: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, config: &SfiConfig) -> Result<()> {
    let parser = match &args.pattern {
        Some(pattern) => NameVersionParser::new(pattern)?,
        None => NameVersionParser::default(),
    };
    let default_version = args
        .default_version
        .as_deref()
        .unwrap_or(&config.default_version);

    let parsed = parser.parse(&args.filename, default_version);

    if args.json {
        print_json(&parsed)
    } else {
        println!("name:    {}", parsed.name);
        println!("version: {}", parsed.version);
        Ok(())
    }
}
