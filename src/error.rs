use thiserror::Error;

mod code;

pub use code::ErrorCode;

/// SFI統一エラー型
#[derive(Debug, Error)]
pub enum SfiError {
    #[error("Invalid name/version pattern '{pattern}': {reason}")]
    InvalidNameVersionPattern { pattern: String, reason: String },

    #[error("Name/version pattern '{0}' must contain at least one capturing group")]
    NoCapturingGroup(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("'{type_name}' must be a subtype of {base}")]
    NotAFileArtifactType { type_name: String, base: String },

    #[error("Cannot instantiate virtual type: {0}")]
    VirtualType(String),

    #[error("Import context does not support attribute '{0}'")]
    UnsupportedAttribute(String),

    #[error("Package is incomplete: {0}")]
    IncompletePackage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SfiError>;

impl SfiError {
    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            SfiError::InvalidNameVersionPattern { .. } => ErrorCode::Cfg001,
            SfiError::NoCapturingGroup(_) => ErrorCode::Cfg002,
            SfiError::Config(_) => ErrorCode::Cfg003,
            SfiError::UnknownType(_) => ErrorCode::Typ001,
            SfiError::NotAFileArtifactType { .. } => ErrorCode::Typ002,
            SfiError::VirtualType(_) => ErrorCode::Typ003,
            SfiError::UnsupportedAttribute(_) => ErrorCode::Ctx001,
            SfiError::IncompletePackage(_) => ErrorCode::Pkg001,
            SfiError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorCode::Io001,
            SfiError::Io(_) => ErrorCode::Io002,
            SfiError::Json(_) => ErrorCode::Int001,
        }
    }

    /// 構築時に検出される設定エラーかどうか
    ///
    /// 設定エラーは対象オブジェクトの構築自体を失敗させる。
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SfiError::InvalidNameVersionPattern { .. }
                | SfiError::NoCapturingGroup(_)
                | SfiError::Config(_)
                | SfiError::UnknownType(_)
                | SfiError::NotAFileArtifactType { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_classified() {
        assert!(SfiError::NoCapturingGroup(".+".to_string()).is_configuration_error());
        assert!(SfiError::NotAFileArtifactType {
            type_name: "generic.Resource".to_string(),
            base: "udm.BaseDeployableFileArtifact".to_string(),
        }
        .is_configuration_error());
        assert!(!SfiError::UnsupportedAttribute("x".to_string()).is_configuration_error());
    }

    #[test]
    fn io_not_found_maps_to_io001() {
        let err = SfiError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.code(), ErrorCode::Io001);
    }

    #[test]
    fn not_a_file_artifact_message_names_base_type() {
        let err = SfiError::NotAFileArtifactType {
            type_name: "generic.Resource".to_string(),
            base: "udm.BaseDeployableFileArtifact".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'generic.Resource' must be a subtype of udm.BaseDeployableFileArtifact"
        );
    }
}
