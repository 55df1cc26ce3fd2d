/// Error codes with category prefix
///
/// Categories:
/// - CFG: Configuration parsing/validation
/// - TYP: Type registry lookups and constraints
/// - CTX: Import context operations
/// - PKG: Package preparation
/// - IO: File system operations
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Config errors (CFG001-CFG099)
    /// Name/version pattern does not compile
    Cfg001,
    /// Name/version pattern has no capturing group
    Cfg002,
    /// Invalid config file
    Cfg003,

    // Type errors (TYP001-TYP099)
    /// Type not registered
    Typ001,
    /// Type is not a file artifact
    Typ002,
    /// Type is virtual
    Typ003,

    // Context errors (CTX001-CTX099)
    /// Attribute access unsupported
    Ctx001,

    // Package errors (PKG001-PKG099)
    /// Package info lacks name or version
    Pkg001,

    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Other I/O failure
    Io002,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "CFG001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Cfg003 => "CFG003",
            ErrorCode::Typ001 => "TYP001",
            ErrorCode::Typ002 => "TYP002",
            ErrorCode::Typ003 => "TYP003",
            ErrorCode::Ctx001 => "CTX001",
            ErrorCode::Pkg001 => "PKG001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Cfg001 => "The name/version regular expression could not be compiled",
            ErrorCode::Cfg002 => "The name/version regular expression has no capturing group",
            ErrorCode::Cfg003 => "The configuration file has an invalid format",
            ErrorCode::Typ001 => "The type is not registered in the type registry",
            ErrorCode::Typ002 => "The importer type is not a file artifact type",
            ErrorCode::Typ003 => "Virtual types cannot be instantiated",
            ErrorCode::Ctx001 => "The import context does not support attributes",
            ErrorCode::Pkg001 => "The package has no application name or version",
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "The file or directory could not be accessed",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
