//! sfi import コマンド
//!
//! 単一ファイルを、対応するインポーターでデプロイメントパッケージとしてインポートする。

use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use sfi::config::SfiConfig;
use sfi::fs::{FileSystem, RealFs};
use sfi::output::{print_json, CommandSummary};
use sfi::package::{AttributeContext, FileSource, ImportSource, ImportedPackageView};
use sfi::udm::ConfigurationItem;
use sfi::{ListableImporter, Result, SfiError};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct Args {
    /// File to import
    pub file: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, config: &SfiConfig) -> Result<()> {
    if !RealFs.is_file(&args.file) {
        return Err(SfiError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a file", args.file.display()),
        )));
    }

    let built = config.build()?;
    let source: Arc<dyn ImportSource> = Arc::new(FileSource::new(&args.file));

    let importer = built
        .importers
        .iter()
        .find(|importer| importer.can_handle(source.as_ref()))
        .ok_or_else(|| {
            SfiError::Config(format!(
                "no importer handles '{}'",
                args.file.display()
            ))
        })?;

    let mut context = AttributeContext::new();
    let package_info = importer.prepare_package(source, &mut context)?;
    let result = importer.import_entities(&package_info, &mut context);
    importer.clean_up(&package_info, &mut context);
    let imported = result?;

    if args.json {
        return print_json(&ImportedPackageView::from(&imported));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Type", "File"]);
    for deployable in imported.deployables() {
        table.add_row(vec![
            deployable.id().to_string(),
            deployable.name().to_string(),
            deployable.type_handle().to_string(),
            deployable
                .file()
                .map(|f| f.path().display().to_string())
                .unwrap_or_default(),
        ]);
    }
    println!("{table}");
    println!(
        "{}",
        CommandSummary::imported(
            imported.deployables().len(),
            imported.deployment_package().id()
        )
    );
    Ok(())
}
