//! sfi list コマンド
//!
//! ディレクトリ内のインポート可能なファイルを、設定されたインポーターごとに表示する。

use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use sfi::config::SfiConfig;
use sfi::output::{print_json, CommandSummary};
use sfi::{ListableImporter, Result, SingleFileImporter};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Directory to scan
    pub directory: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 一覧の1行
#[derive(Debug, Clone, Serialize)]
struct ListedFile {
    file: String,
    suffix: String,
    #[serde(rename = "type")]
    type_name: String,
    application: String,
    version: String,
}

pub fn run(args: Args, config: &SfiConfig) -> Result<()> {
    let built = config.build()?;

    let mut listed = Vec::new();
    for importer in &built.importers {
        // 順序はファイルシステム依存
        for file in importer.list(&args.directory)? {
            let metadata = importer.package_metadata(&args.directory.join(&file));
            listed.push(ListedFile {
                file,
                suffix: importer.file_suffix().to_string(),
                type_name: importer.core().deployable_type().to_string(),
                application: metadata.app_name,
                version: metadata.app_version,
            });
        }
    }

    if args.json {
        return print_json(&listed);
    }

    if !listed.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["File", "Type", "Application", "Version"]);
        for row in &listed {
            table.add_row(vec![
                row.file.as_str(),
                row.type_name.as_str(),
                row.application.as_str(),
                row.version.as_str(),
            ]);
        }
        println!("{table}");
    }
    println!("{}", CommandSummary::listed(listed.len(), built.importers.len()));
    Ok(())
}
