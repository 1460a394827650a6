/// Error codes with category prefix
///
/// Categories:
/// - IO: File system operations
/// - CFG: Settings file parsing/serialization
/// - HST: Host UI integration
/// - CAT: Item catalog loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O errors (IO001-IO099)
    /// File read/write failed
    Io001,

    // Config errors (CFG001-CFG099)
    /// Invalid settings format
    Cfg001,

    // Host errors (HST001-HST099)
    /// Required host element missing
    Hst001,

    // Catalog errors (CAT001-CAT099)
    /// Invalid item catalog
    Cat001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "CFG001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Hst001 => "HST001",
            ErrorCode::Cat001 => "CAT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "A settings or catalog file could not be read or written",
            ErrorCode::Cfg001 => "The settings file could not be serialized or parsed",
            ErrorCode::Hst001 => "A UI element required by the filter was not found in the host",
            ErrorCode::Cat001 => "The item catalog has an invalid structure",
        }
    }
}
