//! sfi types コマンド
//!
//! 型とその登録済みサブタイプを表示する。

use clap::Parser;
use owo_colors::OwoColorize;
use sfi::config::SfiConfig;
use sfi::types::BASE_DEPLOYABLE_FILE_ARTIFACT;
use sfi::{Result, SfiError, SubtypeOf, TypeHandle};

#[derive(Debug, Parser)]
pub struct Args {
    /// Root type (defaults to the file artifact base type)
    #[arg(default_value = BASE_DEPLOYABLE_FILE_ARTIFACT)]
    pub root: String,
}

pub fn run(args: Args, config: &SfiConfig) -> Result<()> {
    let registry = config.build_registry()?;
    let root = TypeHandle::value_of(args.root);
    if !registry.contains(&root) {
        return Err(SfiError::UnknownType(root.to_string()));
    }

    let predicate = SubtypeOf::new(&registry, &root);
    let mut types: Vec<_> = predicate.types().collect();
    types.sort();

    for type_handle in types {
        let descriptor = registry.descriptor(type_handle)?;
        let marker = if descriptor.is_virtual() {
            " (virtual)".dimmed().to_string()
        } else {
            String::new()
        };
        if type_handle == &root {
            println!("{}{}", type_handle.bold(), marker);
        } else {
            println!("  {}{}", type_handle, marker);
        }
    }
    Ok(())
}
