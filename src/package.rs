//! インポート対象パッケージのモデル
//!
//! インポート元（ImportSource）、インポートコンテキスト、パッケージ情報、
//! インポート結果を定義する。

use crate::error::{Result, SfiError};
use crate::types::TypeHandle;
use crate::udm::{ConfigurationItem, Deployable};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

/// アプリケーションのルートディレクトリ
pub const APPLICATIONS_ROOT: &str = "Applications";

/// インポート元
pub trait ImportSource: fmt::Debug + Send + Sync {
    /// インポート対象のローカルファイル
    fn file(&self) -> &Path;
}

/// ローカルファイルをそのまま使うインポート元
#[derive(Debug, Clone)]
pub struct FileSource {
    file: PathBuf,
}

impl FileSource {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }
}

impl ImportSource for FileSource {
    fn file(&self) -> &Path {
        &self.file
    }
}

/// インポートコンテキスト
///
/// 属性の読み書きはホスト側の責務。未対応の実装はデフォルトで拒否する。
pub trait ImportingContext {
    fn attribute(&self, name: &str) -> Result<Option<Value>> {
        Err(SfiError::UnsupportedAttribute(name.to_string()))
    }

    fn set_attribute(&mut self, name: &str, _value: Value) -> Result<()> {
        Err(SfiError::UnsupportedAttribute(name.to_string()))
    }
}

/// 属性を持たないコンテキスト
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAttributes;

impl ImportingContext for NoAttributes {}

/// インメモリで属性を保持するコンテキスト
#[derive(Debug, Clone, Default)]
pub struct AttributeContext {
    attributes: HashMap<String, Value>,
}

impl AttributeContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImportingContext for AttributeContext {
    fn attribute(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<()> {
        self.attributes.insert(name.to_string(), value);
        Ok(())
    }
}

/// ファイル名などから導出したパッケージのメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub app_name: String,
    pub app_version: String,
}

impl PackageMetadata {
    pub fn new(app_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_version: app_version.into(),
        }
    }
}

/// インポート準備済みのパッケージ情報
#[derive(Debug, Clone)]
pub struct PackageInfo {
    source: Arc<dyn ImportSource>,
    application_name: Option<String>,
    application_version: Option<String>,
}

impl PackageInfo {
    pub fn new(source: Arc<dyn ImportSource>) -> Self {
        Self {
            source,
            application_name: None,
            application_version: None,
        }
    }

    pub fn source(&self) -> &Arc<dyn ImportSource> {
        &self.source
    }

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn set_application_name(&mut self, name: impl Into<String>) {
        self.application_name = Some(name.into());
    }

    pub fn application_version(&self) -> Option<&str> {
        self.application_version.as_deref()
    }

    pub fn set_application_version(&mut self, version: impl Into<String>) {
        self.application_version = Some(version.into());
    }
}

impl fmt::Display for PackageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({})",
            self.application_name.as_deref().unwrap_or("<unnamed>"),
            self.application_version.as_deref().unwrap_or("<unversioned>"),
            self.source.file().display()
        )
    }
}

/// アプリケーション
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    id: String,
}

impl ConfigurationItem for Application {
    fn id(&self) -> &str {
        &self.id
    }

    fn type_handle(&self) -> &TypeHandle {
        &APPLICATION_TYPE
    }
}

/// アプリケーションのバージョン（デプロイメントパッケージ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentPackage {
    id: String,
}

impl ConfigurationItem for DeploymentPackage {
    fn id(&self) -> &str {
        &self.id
    }

    fn type_handle(&self) -> &TypeHandle {
        &DEPLOYMENT_PACKAGE_TYPE
    }
}

static APPLICATION_TYPE: LazyLock<TypeHandle> =
    LazyLock::new(|| TypeHandle::value_of("udm.Application"));
static DEPLOYMENT_PACKAGE_TYPE: LazyLock<TypeHandle> =
    LazyLock::new(|| TypeHandle::value_of("udm.DeploymentPackage"));

/// インポート結果
///
/// `Applications/<name>` のアプリケーションと、
/// `Applications/<name>/<version>` のデプロイメントパッケージを持つ。
#[derive(Debug, Clone)]
pub struct ImportedPackage {
    package_info: PackageInfo,
    application: Application,
    deployment_package: DeploymentPackage,
    deployables: Vec<Deployable>,
}

impl ImportedPackage {
    /// パッケージ情報からインポート結果を作成
    ///
    /// アプリケーション名/バージョンが未設定の場合は Err。
    pub fn new(package_info: PackageInfo) -> Result<Self> {
        let name = package_info
            .application_name()
            .ok_or_else(|| SfiError::IncompletePackage("no application name".to_string()))?;
        let version = package_info
            .application_version()
            .ok_or_else(|| SfiError::IncompletePackage("no application version".to_string()))?;

        let application = Application {
            id: format!("{}/{}", APPLICATIONS_ROOT, name),
        };
        let deployment_package = DeploymentPackage {
            id: format!("{}/{}", application.id, version),
        };

        Ok(Self {
            package_info,
            application,
            deployment_package,
            deployables: Vec::new(),
        })
    }

    pub fn package_info(&self) -> &PackageInfo {
        &self.package_info
    }

    pub fn application(&self) -> &Application {
        &self.application
    }

    pub fn deployment_package(&self) -> &DeploymentPackage {
        &self.deployment_package
    }

    pub fn deployables(&self) -> &[Deployable] {
        &self.deployables
    }

    pub fn add_deployable(&mut self, deployable: Deployable) {
        self.deployables.push(deployable);
    }
}

/// インポート結果の出力用ビュー
#[derive(Debug, Clone, Serialize)]
pub struct ImportedPackageView<'a> {
    pub source: &'a Path,
    pub application: &'a str,
    pub version: &'a str,
    pub package_id: &'a str,
    pub deployables: &'a [Deployable],
}

impl<'a> From<&'a ImportedPackage> for ImportedPackageView<'a> {
    fn from(package: &'a ImportedPackage) -> Self {
        Self {
            source: package.package_info.source().file(),
            application: package.application.name(),
            version: package.deployment_package.name(),
            package_id: package.deployment_package.id(),
            deployables: &package.deployables,
        }
    }
}

#[cfg(test)]
#[path = "package_test.rs"]
mod tests;
