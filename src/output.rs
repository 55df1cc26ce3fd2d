use crate::error::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    /// 対応ファイル一覧のサマリ
    pub fn listed(found: usize, importers: usize) -> Self {
        match found {
            0 => Self {
                prefix: "•".yellow().to_string(),
                message: format!("No importable files found ({} importer(s) checked)", importers),
            },
            n => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} importable file(s) found", n.green()),
            },
        }
    }

    /// インポート結果のサマリ
    pub fn imported(deployables: usize, package_id: &str) -> Self {
        match deployables {
            0 => Self {
                prefix: "•".yellow().to_string(),
                message: format!("No deployables imported into {}", package_id),
            },
            n => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} deployable(s) imported into {}", n.green(), package_id.bold()),
            },
        }
    }
}

impl std::fmt::Display for CommandSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}

/// JSON で標準出力へ出力
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
