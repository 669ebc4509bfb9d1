use crate::config::TransferMode;
use crate::error::RenameError;
use filetime::FileTime;
use log::debug;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// 將檔案搬移或複製到目標路徑，不覆寫已存在的檔案
pub fn transfer_file(source: &Path, target: &Path, mode: TransferMode) -> Result<(), RenameError> {
    let result = if target.symlink_metadata().is_ok() {
        Err(io::Error::new(ErrorKind::AlreadyExists, "target already exists"))
    } else if mode.is_copy() {
        copy_preserving_metadata(source, target)
    } else {
        move_file(source, target)
    };

    result.map_err(|source_error| RenameError::Transfer {
        action: if mode.is_copy() { "copy" } else { "move" },
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: source_error,
    })
}

/// 複製檔案並保留權限與存取、修改時間
fn copy_preserving_metadata(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;

    let metadata = fs::metadata(source)?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(target, accessed, modified)
}

/// 搬移檔案，跨檔案系統時改為複製後刪除
fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(rename_error) => {
            debug!(
                "rename 失敗，改用複製後刪除 {}: {rename_error}",
                source.display()
            );
            copy_preserving_metadata(source, target)?;
            if let Err(remove_error) = fs::remove_file(source) {
                let _ = fs::remove_file(target);
                return Err(remove_error);
            }
            Ok(())
        }
    }
}
