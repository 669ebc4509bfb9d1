//! 錯誤類型
//!
//! 致命錯誤會中止整個流程；`Transfer` 只影響單一檔案

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    /// 來源路徑不存在或不是資料夾
    #[error("folder '{}' does not exist or is not a directory", .0.display())]
    DirectoryNotFound(PathBuf),

    /// 無法辨識的排序方式
    #[error("unknown sort method: {0} (expected name, created or modified)")]
    UnknownSortMethod(String),

    /// 基本檔名含有路徑分隔字元
    #[error("invalid base name '{0}': it must not contain path separators")]
    InvalidBaseName(String),

    /// 單一檔案搬移或複製失敗
    #[error("failed to {action} {} -> {}: {source}", .from.display(), .to.display())]
    Transfer {
        action: &'static str,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_directory_not_found_message() {
        let error = RenameError::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(
            error.to_string(),
            "folder '/no/such/dir' does not exist or is not a directory"
        );
    }

    #[test]
    fn test_transfer_error_keeps_source() {
        let error = RenameError::Transfer {
            action: "copy",
            from: PathBuf::from("a.jpg"),
            to: PathBuf::from("Copied/Image1.jpg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(error.to_string().starts_with("failed to copy a.jpg -> "));
        assert!(std::error::Error::source(&error).is_some());
    }
}
