//! 単一ファイルアーティファクトのインポート
//!
//! ディレクトリ内のアーカイブ（`.ear`, `.war` など）を、ファイル名の規約から
//! アプリケーション名とバージョンを導出してパッケージとしてインポートする。

pub mod config;
pub mod env;
pub mod error;
pub mod fs;
pub mod importer;
pub mod logging;
pub mod name_version;
pub mod output;
pub mod package;
pub mod predicates;
pub mod types;
pub mod udm;

pub use error::{Result, SfiError};
pub use importer::{ExtensionBasedImporter, ImporterCore, ListableImporter, SingleFileImporter};
pub use name_version::{NameAndVersion, NameVersionParser};
pub use predicates::SubtypeOf;
pub use types::{TypeHandle, TypeRegistry};
