//! 目標資料夾配置
//!
//! 命名規則：第一個為 `Renamed`，之後依序為 `Renamed1`、`Renamed2`…（`Copied` 相同）

use crate::config::TransferMode;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 配置好的目標資料夾
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub path: PathBuf,
    /// 預覽模式下只產生路徑，不建立資料夾
    pub simulated: bool,
}

/// 組合資料夾名稱，編號 0 不加後綴
#[must_use]
pub fn destination_folder_name(label: &str, suffix: usize) -> String {
    if suffix == 0 {
        label.to_string()
    } else {
        format!("{label}{suffix}")
    }
}

/// 從編號 0 開始找出第一個不存在的資料夾名稱
///
/// 只有確定不存在（`NotFound`）才算可用，其他讀取錯誤直接回傳
pub fn next_available_name(root: &Path, label: &str) -> Result<PathBuf> {
    let mut suffix = 0;
    loop {
        let candidate = root.join(destination_folder_name(label, suffix));
        match candidate.symlink_metadata() {
            Ok(_) => suffix += 1,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(candidate),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("無法檢查目標資料夾: {}", candidate.display()));
            }
        }
    }
}

/// 配置目標資料夾
///
/// 建立時若名稱剛好被佔用，會繼續往下一個編號嘗試
pub fn allocate_destination(
    root: &Path,
    mode: TransferMode,
    dry_run: bool,
) -> Result<Destination> {
    let label = mode.folder_label();

    if dry_run {
        let path = next_available_name(root, label)?;
        debug!("預覽模式，目標資料夾不會建立: {}", path.display());
        return Ok(Destination {
            path,
            simulated: true,
        });
    }

    loop {
        let path = next_available_name(root, label)?;
        match fs::create_dir(&path) {
            Ok(()) => {
                info!("建立目標資料夾: {}", path.display());
                return Ok(Destination {
                    path,
                    simulated: false,
                });
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("資料夾已被佔用，改用下一個編號: {}", path.display());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("無法建立目標資料夾: {}", path.display()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_folder_name_suffix() {
        assert_eq!(destination_folder_name("Renamed", 0), "Renamed");
        assert_eq!(destination_folder_name("Renamed", 1), "Renamed1");
        assert_eq!(destination_folder_name("Copied", 12), "Copied12");
    }

    #[test]
    fn test_next_available_name_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            next_available_name(temp_dir.path(), "Renamed").unwrap(),
            temp_dir.path().join("Renamed")
        );
    }

    #[test]
    fn test_next_available_name_skips_existing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("Renamed")).unwrap();
        fs::create_dir(root.join("Renamed1")).unwrap();
        // 一般檔案也算佔用
        fs::write(root.join("Renamed2"), "file").unwrap();

        assert_eq!(next_available_name(root, "Renamed").unwrap(), root.join("Renamed3"));
        assert_eq!(next_available_name(root, "Copied").unwrap(), root.join("Copied"));
    }

    #[test]
    fn test_allocate_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let first = allocate_destination(root, TransferMode::Move, false).unwrap();
        let second = allocate_destination(root, TransferMode::Move, false).unwrap();

        assert_eq!(first.path, root.join("Renamed"));
        assert_eq!(second.path, root.join("Renamed1"));
        assert!(first.path.is_dir() && second.path.is_dir());
        assert!(!first.simulated);
    }

    #[test]
    fn test_allocate_copy_label() {
        let temp_dir = TempDir::new().unwrap();
        let destination = allocate_destination(temp_dir.path(), TransferMode::Copy, false).unwrap();
        assert_eq!(destination.path, temp_dir.path().join("Copied"));
    }

    #[test]
    fn test_allocate_dry_run_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("Renamed")).unwrap();

        let destination = allocate_destination(root, TransferMode::Move, true).unwrap();

        assert!(destination.simulated);
        assert_eq!(destination.path, root.join("Renamed1"));
        assert!(!destination.path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_root_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root 帳號不受權限限制，此時無法重現
        let restricted = locked.join("Renamed").symlink_metadata().is_err_and(|e| {
            e.kind() == ErrorKind::PermissionDenied
        });
        let result = next_available_name(&locked, "Renamed");

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if restricted {
            assert!(result.is_err());
        }
    }
}
