//! 拡張子ベースのインポーター

use super::{ImporterCore, SingleFileImporter};
use crate::error::Result;
use crate::types::{TypeHandle, TypeRegistry};
use std::path::Path;
use std::sync::Arc;

/// ファイル名のサフィックス（大文字小文字を区別しない）で対応ファイルを判定するインポーター
#[derive(Debug, Clone)]
pub struct ExtensionBasedImporter {
    core: ImporterCore,
    file_suffix: String,
}

impl ExtensionBasedImporter {
    /// 拡張子（先頭の `.` 無し、例: `ear`）と型から作成
    pub fn new(extension: &str, deployable_type: TypeHandle, registry: Arc<TypeRegistry>) -> Result<Self> {
        Ok(Self::from_core(
            extension,
            ImporterCore::new(deployable_type, registry)?,
        ))
    }

    /// 構築済みの ImporterCore から作成
    ///
    /// 先頭の `.` は取り除く（`.ear` と `ear` は同じ）。
    pub fn from_core(extension: &str, core: ImporterCore) -> Self {
        let extension = extension.trim_start_matches('.');
        Self {
            core,
            file_suffix: format!(".{}", extension.to_lowercase()),
        }
    }

    /// 判定に使うサフィックス（例: `.ear`）
    pub fn file_suffix(&self) -> &str {
        &self.file_suffix
    }
}

impl SingleFileImporter for ExtensionBasedImporter {
    fn core(&self) -> &ImporterCore {
        &self.core
    }

    fn is_supported_file(&self, file: &Path) -> bool {
        file.file_name()
            .map(|n| n.to_string_lossy().to_lowercase().ends_with(&self.file_suffix))
            .unwrap_or(false)
    }
}
