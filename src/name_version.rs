//! ファイル名からのアプリケーション名/バージョン抽出
//!
//! `<name>.<ext>` または `<name>-<version>.<ext>` 形式のファイル名を解析する。
//! パターンに一致しない場合はファイル名全体を名前とし、デフォルトバージョンを使う。

use crate::error::{Result, SfiError};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// デフォルトのファイル名パターン（`<name>.<ext>` / `<name>-<version>.<ext>`）
pub const DEFAULT_NAME_VERSION_PATTERN: &str = r"([A-Za-z0-9]+)(?:-([^.]+))?\.[A-Za-z0-9]+";

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&anchored(DEFAULT_NAME_VERSION_PATTERN))
        .expect("default name/version pattern must compile")
});

/// 完全一致させるためにパターンをアンカーで囲む
fn anchored(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}

/// ファイル名から抽出した名前とバージョン
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAndVersion {
    pub name: String,
    pub version: String,
}

impl NameAndVersion {
    /// デフォルトパターンで解析
    pub fn from_filename(filename: &str, default_version: &str) -> Self {
        NameVersionParser::default().parse(filename, default_version)
    }

    /// 指定パターンで解析
    pub fn from_filename_with_pattern(
        filename: &str,
        default_version: &str,
        pattern: &str,
    ) -> Result<Self> {
        Ok(NameVersionParser::new(pattern)?.parse(filename, default_version))
    }
}

/// 名前/バージョンパーサー
///
/// グループ1を名前、グループ2（存在し一致した場合）をバージョンとして扱う。
/// 構築時に少なくとも1つのキャプチャグループを持つことを検証する。
#[derive(Debug, Clone)]
pub struct NameVersionParser {
    pattern: Regex,
    source: String,
}

impl Default for NameVersionParser {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
            source: DEFAULT_NAME_VERSION_PATTERN.to_string(),
        }
    }
}

impl NameVersionParser {
    /// パターン文字列からパーサーを作成
    ///
    /// - 正規表現として不正な場合は Err
    /// - キャプチャグループを持たない場合は Err
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Regex::new(&anchored(pattern)).map_err(|e| {
            SfiError::InvalidNameVersionPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;

        // captures_len() はグループ0（全体一致）を含む
        if compiled.captures_len() < 2 {
            return Err(SfiError::NoCapturingGroup(pattern.to_string()));
        }

        Ok(Self {
            pattern: compiled,
            source: pattern.to_string(),
        })
    }

    /// 構築に使ったパターン文字列（アンカー無し）
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// キャプチャグループ数（グループ0を除く）
    pub fn group_count(&self) -> usize {
        self.pattern.captures_len() - 1
    }

    /// ファイル名を解析
    ///
    /// 一致しない場合はエラーではなく、ファイル名全体とデフォルトバージョンを返す。
    pub fn parse(&self, filename: &str, default_version: &str) -> NameAndVersion {
        let Some(captures) = self.pattern.captures(filename) else {
            tracing::trace!(filename, "no name/version match, using filename as name");
            return NameAndVersion {
                name: filename.to_string(),
                version: default_version.to_string(),
            };
        };

        let name = captures
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or(filename)
            .to_string();

        let version = if self.group_count() > 1 {
            captures
                .get(2)
                .map(|m| m.as_str())
                .filter(|v| !v.is_empty())
                .unwrap_or(default_version)
        } else {
            default_version
        };

        NameAndVersion {
            name,
            version: version.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "name_version_test.rs"]
mod tests;

#[cfg(test)]
#[path = "name_version_proptests.rs"]
mod proptests;
