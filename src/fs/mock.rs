//! テスト用モックファイルシステム

use super::*;
use crate::error::SfiError;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
///
/// パス文字列 → ディレクトリかどうか
pub struct MockFs {
    entries: RwLock<HashMap<String, bool>>,
}

fn not_found() -> SfiError {
    std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into()
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str) {
        self.entries.write().unwrap().insert(path.to_string(), false);
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.entries.write().unwrap().insert(path.to_string(), true);
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn is_file(&self, path: &Path) -> bool {
        self.entries.read().unwrap().get(path.to_string_lossy().as_ref()) == Some(&false)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>> {
        let path_str = path.to_string_lossy().to_string();
        let entries = self.entries.read().unwrap();

        // パスがディレクトリとして存在するかチェック
        match entries.get(&path_str) {
            Some(false) => {
                return Err(SfiError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "Not a directory",
                )));
            }
            None => return Err(not_found()),
            Some(true) => {}
        }

        let prefix = if path_str.ends_with('/') {
            path_str.clone()
        } else {
            format!("{}/", path_str)
        };

        Ok(entries
            .keys()
            .filter(|k| {
                let Some(remainder) = k.strip_prefix(&prefix) else {
                    return false;
                };
                // 直接の子のみ（サブディレクトリの中身は除外）
                !remainder.is_empty() && !remainder.contains('/')
            })
            .map(|k| FsDirEntry {
                path: PathBuf::from(k),
            })
            .collect())
    }
}
