use crate::error::RenameError;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<(), RenameError> {
    if !path.is_dir() {
        return Err(RenameError::DirectoryNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// 基本檔名不可包含路徑分隔字元，否則新檔案會落在目標資料夾之外
pub fn validate_base_name(base_name: &str) -> Result<(), RenameError> {
    if base_name.contains(['/', '\\']) {
        return Err(RenameError::InvalidBaseName(base_name.to_string()));
    }
    Ok(())
}
