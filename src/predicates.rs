//! 型・変更レコード用の述語
//!
//! 型階層に基づく判定をクロージャとして合成する。

use crate::types::{TypeHandle, TypeHierarchy};
use crate::udm::{ConfigurationItem, Delta, Deployed, Operation};
use std::collections::HashSet;

/// 型がルート型自身またはその子孫型かどうかを判定する
///
/// 子孫型の集合は構築時にスナップショットされ、以降のレジストリ変更は反映されない。
#[derive(Debug, Clone)]
pub struct SubtypeOf {
    root: TypeHandle,
    subtypes: HashSet<TypeHandle>,
}

impl SubtypeOf {
    pub fn new(hierarchy: &dyn TypeHierarchy, root: &TypeHandle) -> Self {
        let mut subtypes = hierarchy.subtypes(root);
        subtypes.insert(root.clone());
        Self {
            root: root.clone(),
            subtypes,
        }
    }

    pub fn root(&self) -> &TypeHandle {
        &self.root
    }

    pub fn is_subtype_or_self(&self, candidate: &TypeHandle) -> bool {
        self.subtypes.contains(candidate)
    }

    /// スナップショットに含まれる型（順序不定）
    pub fn types(&self) -> impl Iterator<Item = &TypeHandle> {
        self.subtypes.iter()
    }
}

/// 型述語
pub fn subtype_of(hierarchy: &dyn TypeHierarchy, root: &TypeHandle) -> impl Fn(&TypeHandle) -> bool {
    let predicate = SubtypeOf::new(hierarchy, root);
    move |candidate| predicate.is_subtype_or_self(candidate)
}

/// 設定アイテムの宣言型に対する型述語
pub fn instance_of(
    hierarchy: &dyn TypeHierarchy,
    root: &TypeHandle,
) -> impl Fn(&dyn ConfigurationItem) -> bool {
    let predicate = SubtypeOf::new(hierarchy, root);
    move |item| predicate.is_subtype_or_self(item.type_handle())
}

/// 変更レコードの対象エンティティを取り出す
///
/// `Destroy` の場合は変更前、それ以外は変更後のエンティティ。
pub fn extract_deployed(delta: &Delta) -> Option<&Deployed> {
    if delta.operation() == Operation::Destroy {
        delta.previous()
    } else {
        delta.deployed()
    }
}

/// 変更レコードの対象エンティティに対する型述語
///
/// 対象エンティティが無い場合は false。
pub fn delta_of(hierarchy: &dyn TypeHierarchy, root: &TypeHandle) -> impl Fn(&Delta) -> bool {
    let is_instance = instance_of(hierarchy, root);
    move |delta| {
        extract_deployed(delta)
            .map(|deployed| is_instance(deployed as &dyn ConfigurationItem))
            .unwrap_or(false)
    }
}

/// 変更操作の一致判定
pub fn operation_is(operation: Operation) -> impl Fn(&Delta) -> bool {
    move |delta| delta.operation() == operation
}

#[cfg(test)]
#[path = "predicates_test.rs"]
mod tests;
