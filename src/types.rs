//! 型レジストリ
//!
//! 設定アイテムの型階層と、型からデプロイ可能エンティティを生成するディスクリプタを管理する。

use crate::error::{Result, SfiError};
use crate::udm::Deployable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet, VecDeque};

/// 全ての設定アイテムの基底型
pub const BASE_CONFIGURATION_ITEM: &str = "udm.BaseConfigurationItem";
/// デプロイ可能エンティティの基底型
pub const BASE_DEPLOYABLE: &str = "udm.BaseDeployable";
/// ファイルを持つデプロイ可能エンティティの基底型
pub const BASE_DEPLOYABLE_FILE_ARTIFACT: &str = "udm.BaseDeployableFileArtifact";
/// アーカイブファイルの基底型
pub const BASE_DEPLOYABLE_ARCHIVE_ARTIFACT: &str = "udm.BaseDeployableArchiveArtifact";
/// デプロイ済みエンティティの基底型
pub const BASE_DEPLOYED: &str = "udm.BaseDeployed";

/// 型の識別子（例: `jee.Ear`）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeHandle(String);

impl TypeHandle {
    pub fn value_of(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// プレフィックス（`jee.Ear` の `jee`）
    pub fn prefix(&self) -> &str {
        self.0.split_once('.').map(|(p, _)| p).unwrap_or("")
    }
}

impl std::fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeHandle {
    fn from(name: &str) -> Self {
        Self::value_of(name)
    }
}

/// 型階層の参照
pub trait TypeHierarchy: Send + Sync {
    /// 指定型の全ての子孫型（推移的）を返す。自身は含まない。
    fn subtypes(&self, root: &TypeHandle) -> HashSet<TypeHandle>;
}

/// 型ディスクリプタ
#[derive(Debug, Clone)]
pub struct Descriptor {
    type_handle: TypeHandle,
    super_types: Vec<TypeHandle>,
    is_virtual: bool,
}

impl Descriptor {
    pub fn type_handle(&self) -> &TypeHandle {
        &self.type_handle
    }

    pub fn super_types(&self) -> &[TypeHandle] {
        &self.super_types
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    /// この型の新しいインスタンスを生成
    ///
    /// 仮想型（抽象型）はインスタンス化できない。
    pub fn new_instance(&self, id: impl Into<String>) -> Result<Deployable> {
        if self.is_virtual {
            return Err(SfiError::VirtualType(self.type_handle.to_string()));
        }
        Ok(Deployable::new(id, self.type_handle.clone()))
    }
}

/// インメモリ型レジストリ
///
/// 型の登録順序に依存しないよう BTreeMap で保持する。
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    descriptors: BTreeMap<TypeHandle, Descriptor>,
}

impl TypeRegistry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 組み込み型を登録したレジストリを作成
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let builtin: &[(&str, &[&str], bool)] = &[
            (BASE_CONFIGURATION_ITEM, &[], true),
            (BASE_DEPLOYABLE, &[BASE_CONFIGURATION_ITEM], true),
            (BASE_DEPLOYABLE_FILE_ARTIFACT, &[BASE_DEPLOYABLE], true),
            (
                BASE_DEPLOYABLE_ARCHIVE_ARTIFACT,
                &[BASE_DEPLOYABLE_FILE_ARTIFACT],
                true,
            ),
            (BASE_DEPLOYED, &[BASE_CONFIGURATION_ITEM], true),
            ("jee.Ear", &[BASE_DEPLOYABLE_ARCHIVE_ARTIFACT], false),
            ("jee.War", &[BASE_DEPLOYABLE_ARCHIVE_ARTIFACT], false),
            ("jee.Jar", &[BASE_DEPLOYABLE_ARCHIVE_ARTIFACT], false),
            ("file.File", &[BASE_DEPLOYABLE_FILE_ARTIFACT], false),
            ("generic.Resource", &[BASE_DEPLOYABLE], false),
        ];
        for (name, supers, is_virtual) in builtin {
            registry
                .register(
                    TypeHandle::value_of(*name),
                    supers.iter().map(|s| TypeHandle::value_of(*s)).collect(),
                    *is_virtual,
                )
                .expect("builtin type table is ordered parent-first");
        }
        registry
    }

    /// 型を登録
    ///
    /// - 親型は登録済みでなければならない
    /// - 同名の型は上書きする
    pub fn register(
        &mut self,
        type_handle: TypeHandle,
        super_types: Vec<TypeHandle>,
        is_virtual: bool,
    ) -> Result<()> {
        if let Some(missing) = super_types
            .iter()
            .find(|s| !self.descriptors.contains_key(*s))
        {
            return Err(SfiError::UnknownType(missing.to_string()));
        }

        self.descriptors.insert(
            type_handle.clone(),
            Descriptor {
                type_handle,
                super_types,
                is_virtual,
            },
        );
        Ok(())
    }

    /// 型が登録済みかどうか
    pub fn contains(&self, type_handle: &TypeHandle) -> bool {
        self.descriptors.contains_key(type_handle)
    }

    /// ディスクリプタを取得
    pub fn descriptor(&self, type_handle: &TypeHandle) -> Result<&Descriptor> {
        self.descriptors
            .get(type_handle)
            .ok_or_else(|| SfiError::UnknownType(type_handle.to_string()))
    }

    /// 登録済みの全ディスクリプタ（名前順）
    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.values()
    }
}

impl TypeHierarchy for TypeRegistry {
    fn subtypes(&self, root: &TypeHandle) -> HashSet<TypeHandle> {
        let mut result = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(root.clone());

        while let Some(current) = queue.pop_front() {
            let children = self
                .descriptors
                .values()
                .filter(|d| d.super_types.contains(&current))
                .map(|d| d.type_handle.clone());
            for child in children {
                if child != *root && result.insert(child.clone()) {
                    queue.push_back(child);
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
