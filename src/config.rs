//! インポーター設定
//!
//! TOML 設定ファイルから追加の型定義とインポーター定義を読み込む。
//!
//! ```toml
//! default_version = "1.0"
//!
//! [[types]]
//! name = "acme.Bundle"
//! extends = ["udm.BaseDeployableArchiveArtifact"]
//!
//! [[importers]]
//! extension = "bundle"
//! type = "acme.Bundle"
//! name_version_pattern = '(\w+)_(\d[\w.]*)\.bundle'
//! ```

use crate::env::EnvVar;
use crate::error::{Result, SfiError};
use crate::importer::{ExtensionBasedImporter, ImporterCore, DEFAULT_APP_VERSION};
use crate::name_version::NameVersionParser;
use crate::types::{TypeHandle, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 設定ファイルの場所を指定する環境変数
pub const CONFIG_ENV_VAR: &str = "SFI_CONFIG";

/// 追加の型定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConfig {
    pub name: String,
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

/// インポーター定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// 拡張子（`.` 無し）
    pub extension: String,
    /// デプロイ可能エンティティの型
    #[serde(rename = "type")]
    pub type_name: String,
    /// ファイル名パターン（省略時はデフォルトパターン）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_version_pattern: Option<String>,
    /// デフォルトバージョン（省略時は全体設定）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_version: Option<String>,
}

impl ImporterConfig {
    fn new(extension: &str, type_name: &str) -> Self {
        Self {
            extension: extension.to_string(),
            type_name: type_name.to_string(),
            name_version_pattern: None,
            default_version: None,
        }
    }
}

/// 設定全体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SfiConfig {
    #[serde(default = "default_version")]
    pub default_version: String,
    #[serde(default)]
    pub types: Vec<TypeConfig>,
    #[serde(default = "default_importers")]
    pub importers: Vec<ImporterConfig>,
}

fn default_version() -> String {
    DEFAULT_APP_VERSION.to_string()
}

fn default_importers() -> Vec<ImporterConfig> {
    vec![
        ImporterConfig::new("ear", "jee.Ear"),
        ImporterConfig::new("war", "jee.War"),
        ImporterConfig::new("jar", "jee.Jar"),
    ]
}

impl Default for SfiConfig {
    fn default() -> Self {
        Self {
            default_version: default_version(),
            types: Vec::new(),
            importers: default_importers(),
        }
    }
}

/// 設定から構築したインポーター群
pub struct Importers {
    pub registry: Arc<TypeRegistry>,
    pub importers: Vec<ExtensionBasedImporter>,
}

impl SfiConfig {
    /// TOML 文字列から読み込み
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SfiError::Config(e.to_string()))
    }

    /// ファイルから読み込み
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            SfiError::Config(msg) => SfiError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// 設定ファイルを探して読み込み
    ///
    /// 優先順位: 明示的なパス > 環境変数 `SFI_CONFIG` > 組み込みデフォルト
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| EnvVar::get(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 型レジストリを構築
    ///
    /// 組み込み型に設定の型を順に追加する。親型は先に定義されている必要がある。
    pub fn build_registry(&self) -> Result<TypeRegistry> {
        let mut registry = TypeRegistry::builtin();
        for type_config in &self.types {
            registry.register(
                TypeHandle::value_of(type_config.name.as_str()),
                type_config
                    .extends
                    .iter()
                    .map(|s| TypeHandle::value_of(s.as_str()))
                    .collect(),
                type_config.is_virtual,
            )?;
        }
        Ok(registry)
    }

    /// インポーター群を構築
    ///
    /// 設定エラーはインポートを始める前にまとめて検出される。
    pub fn build(&self) -> Result<Importers> {
        let registry = Arc::new(self.build_registry()?);

        let importers = self
            .importers
            .iter()
            .map(|config| {
                let mut core = ImporterCore::new(
                    TypeHandle::value_of(config.type_name.as_str()),
                    registry.clone(),
                )?
                .with_default_version(
                    config
                        .default_version
                        .clone()
                        .unwrap_or_else(|| self.default_version.clone()),
                );
                if let Some(pattern) = &config.name_version_pattern {
                    core = core.with_parser(NameVersionParser::new(pattern)?);
                }
                Ok(ExtensionBasedImporter::from_core(&config.extension, core))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Importers {
            registry,
            importers,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
