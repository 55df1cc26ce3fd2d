//! 単一ファイルインポーター
//!
//! ディレクトリ内の対応ファイルを列挙し、ファイル名からアプリケーション名/バージョンを導出して
//! 1ファイル = 1デプロイ可能エンティティのパッケージとしてインポートする。
//!
//! ## 処理の流れ
//!
//! ```text
//! list(dir) ──▶ can_handle(source) ──▶ prepare_package() ──▶ import_entities() ──▶ clean_up()
//!                                           │                      │                  │
//!                                  package_metadata()        deployables()     release_package()
//!                                   (NameVersionParser)   (deployable_type())
//! ```

mod extension;

pub use extension::ExtensionBasedImporter;

use crate::error::{Result, SfiError};
use crate::fs::{FileSystem, RealFs};
use crate::name_version::NameVersionParser;
use crate::package::{ImportSource, ImportedPackage, ImportingContext, PackageInfo, PackageMetadata};
use crate::predicates::SubtypeOf;
use crate::types::{TypeHandle, TypeRegistry, BASE_DEPLOYABLE_FILE_ARTIFACT};
use crate::udm::{ConfigurationItem, Deployable, LocalFile};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// アプリケーションバージョンのデフォルト値
pub const DEFAULT_APP_VERSION: &str = "1.0";

/// ホストから呼び出されるインポーター
pub trait ListableImporter {
    /// ディレクトリ内のインポート可能なファイル名一覧
    ///
    /// 順序はファイルシステムが返す順で、プラットフォーム間で一定ではない。
    fn list(&self, directory: &Path) -> Result<Vec<String>>;

    /// インポート元を扱えるかどうか
    fn can_handle(&self, source: &dyn ImportSource) -> bool;

    /// パッケージ情報を準備
    fn prepare_package(
        &self,
        source: Arc<dyn ImportSource>,
        context: &mut dyn ImportingContext,
    ) -> Result<PackageInfo>;

    /// デプロイ可能エンティティをインポート
    fn import_entities(
        &self,
        package_info: &PackageInfo,
        context: &mut dyn ImportingContext,
    ) -> Result<ImportedPackage>;

    /// インポート後の後始末
    fn clean_up(&self, package_info: &PackageInfo, context: &mut dyn ImportingContext);
}

/// インポーターの共通状態
///
/// 構築時に、対象型がファイルアーティファクト型（`udm.BaseDeployableFileArtifact`）の
/// サブタイプであることを検証する。
#[derive(Clone)]
pub struct ImporterCore {
    deployable_type: TypeHandle,
    registry: Arc<TypeRegistry>,
    fs: Arc<dyn FileSystem>,
    parser: NameVersionParser,
    default_version: String,
}

impl std::fmt::Debug for ImporterCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImporterCore")
            .field("deployable_type", &self.deployable_type)
            .field("pattern", &self.parser.pattern())
            .field("default_version", &self.default_version)
            .finish()
    }
}

impl ImporterCore {
    pub fn new(deployable_type: TypeHandle, registry: Arc<TypeRegistry>) -> Result<Self> {
        if !registry.contains(&deployable_type) {
            return Err(SfiError::UnknownType(deployable_type.to_string()));
        }

        let base = TypeHandle::value_of(BASE_DEPLOYABLE_FILE_ARTIFACT);
        if !SubtypeOf::new(registry.as_ref(), &base).is_subtype_or_self(&deployable_type) {
            return Err(SfiError::NotAFileArtifactType {
                type_name: deployable_type.to_string(),
                base: base.to_string(),
            });
        }

        Ok(Self {
            deployable_type,
            registry,
            fs: Arc::new(RealFs),
            parser: NameVersionParser::default(),
            default_version: DEFAULT_APP_VERSION.to_string(),
        })
    }

    /// ファイルシステム実装を差し替え
    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// 名前/バージョンパーサーを差し替え
    pub fn with_parser(mut self, parser: NameVersionParser) -> Self {
        self.parser = parser;
        self
    }

    /// デフォルトバージョンを差し替え
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    pub fn deployable_type(&self) -> &TypeHandle {
        &self.deployable_type
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn parser(&self) -> &NameVersionParser {
        &self.parser
    }

    pub fn default_version(&self) -> &str {
        &self.default_version
    }
}

/// 単一ファイルインポーターの実装フック
///
/// `core` と `is_supported_file` のみ必須。それ以外はデフォルト実装を上書きして挙動を変える。
pub trait SingleFileImporter {
    fn core(&self) -> &ImporterCore;

    /// インポート対象のファイルかどうか
    fn is_supported_file(&self, file: &Path) -> bool;

    /// ファイルからパッケージのメタデータを導出
    fn package_metadata(&self, file: &Path) -> PackageMetadata {
        let core = self.core();
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| file.to_string_lossy());
        let parsed = core.parser().parse(&filename, core.default_version());
        PackageMetadata::new(parsed.name, parsed.version)
    }

    /// デプロイ可能エンティティの型
    fn deployable_type(&self, _file: &Path) -> TypeHandle {
        self.core().deployable_type().clone()
    }

    /// インポートするデプロイ可能エンティティ
    ///
    /// デフォルトではインポート元ファイルを持つエンティティを1つ生成する。
    /// ID は `<パッケージID>/<アプリケーション名>`。
    fn deployables(&self, imported: &ImportedPackage) -> Result<Vec<Deployable>> {
        let file = imported.package_info().source().file();
        let deployable_type = self.deployable_type(file);

        let id = format!(
            "{}/{}",
            imported.deployment_package().id(),
            imported.application().name()
        );
        let mut artifact = self
            .core()
            .registry()
            .descriptor(&deployable_type)?
            .new_instance(id)?;
        artifact.set_file(LocalFile::value_of(file));

        debug!("Created file artifact with ID '{}'", artifact.id());
        Ok(vec![artifact])
    }

    /// インポート後に一時リソースを解放する
    ///
    /// デフォルトでは何もしない。
    fn release_package(&self, _package_info: &PackageInfo, _context: &mut dyn ImportingContext) {}
}

impl<T: SingleFileImporter> ListableImporter for T {
    fn list(&self, directory: &Path) -> Result<Vec<String>> {
        let supported_files: Vec<String> = self
            .core()
            .fs()
            .read_dir(directory)?
            .into_iter()
            .filter(|entry| self.is_supported_file(&entry.path))
            .filter_map(|entry| entry.file_name())
            .collect();

        debug!(
            "Found supported files in package directory: {:?}",
            supported_files
        );
        Ok(supported_files)
    }

    fn can_handle(&self, source: &dyn ImportSource) -> bool {
        self.is_supported_file(source.file())
    }

    fn prepare_package(
        &self,
        source: Arc<dyn ImportSource>,
        _context: &mut dyn ImportingContext,
    ) -> Result<PackageInfo> {
        let metadata = self.package_metadata(source.file());
        let mut package_info = PackageInfo::new(source);
        package_info.set_application_name(metadata.app_name);
        package_info.set_application_version(metadata.app_version);
        Ok(package_info)
    }

    fn import_entities(
        &self,
        package_info: &PackageInfo,
        _context: &mut dyn ImportingContext,
    ) -> Result<ImportedPackage> {
        let mut imported = ImportedPackage::new(package_info.clone())?;
        for deployable in self.deployables(&imported)? {
            debug!(
                "Adding deployable '{}' to package '{}'",
                deployable.id(),
                package_info
            );
            imported.add_deployable(deployable);
        }
        Ok(imported)
    }

    fn clean_up(&self, package_info: &PackageInfo, context: &mut dyn ImportingContext) {
        self.release_package(package_info, context);
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;
