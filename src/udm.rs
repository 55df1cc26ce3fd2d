//! 設定アイテムのドメインモデル
//!
//! デプロイ可能エンティティ、デプロイ済みエンティティ、変更レコード（Delta）を定義する。

use crate::types::TypeHandle;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 型付きの設定アイテム
pub trait ConfigurationItem {
    /// 識別子（`/` 区切りの階層パス）
    fn id(&self) -> &str;

    /// 宣言された型
    fn type_handle(&self) -> &TypeHandle;

    /// 名前（識別子の最後のセグメント）
    fn name(&self) -> &str {
        let id = self.id();
        id.rsplit_once('/').map(|(_, name)| name).unwrap_or(id)
    }
}

/// ローカルファイル参照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn value_of(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// デプロイ可能エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployable {
    id: String,
    #[serde(rename = "type")]
    type_handle: TypeHandle,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<LocalFile>,
}

impl Deployable {
    pub fn new(id: impl Into<String>, type_handle: TypeHandle) -> Self {
        Self {
            id: id.into(),
            type_handle,
            file: None,
        }
    }

    pub fn file(&self) -> Option<&LocalFile> {
        self.file.as_ref()
    }

    pub fn set_file(&mut self, file: LocalFile) {
        self.file = Some(file);
    }
}

impl ConfigurationItem for Deployable {
    fn id(&self) -> &str {
        &self.id
    }

    fn type_handle(&self) -> &TypeHandle {
        &self.type_handle
    }
}

/// デプロイ済みエンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployed {
    id: String,
    #[serde(rename = "type")]
    type_handle: TypeHandle,
}

impl Deployed {
    pub fn new(id: impl Into<String>, type_handle: TypeHandle) -> Self {
        Self {
            id: id.into(),
            type_handle,
        }
    }
}

impl ConfigurationItem for Deployed {
    fn id(&self) -> &str {
        &self.id
    }

    fn type_handle(&self) -> &TypeHandle {
        &self.type_handle
    }
}

/// 変更操作の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Create,
    Modify,
    Destroy,
    Noop,
}

/// 変更レコード
///
/// `Create` は `deployed` のみ、`Destroy` は `previous` のみを持つのが通常。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delta {
    operation: Operation,
    previous: Option<Deployed>,
    deployed: Option<Deployed>,
}

impl Delta {
    pub fn new(operation: Operation, previous: Option<Deployed>, deployed: Option<Deployed>) -> Self {
        Self {
            operation,
            previous,
            deployed,
        }
    }

    pub fn create(deployed: Deployed) -> Self {
        Self::new(Operation::Create, None, Some(deployed))
    }

    pub fn modify(previous: Deployed, deployed: Deployed) -> Self {
        Self::new(Operation::Modify, Some(previous), Some(deployed))
    }

    pub fn destroy(previous: Deployed) -> Self {
        Self::new(Operation::Destroy, Some(previous), None)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn previous(&self) -> Option<&Deployed> {
        self.previous.as_ref()
    }

    pub fn deployed(&self) -> Option<&Deployed> {
        self.deployed.as_ref()
    }
}
