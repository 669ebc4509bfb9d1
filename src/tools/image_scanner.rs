use crate::config::FileTypeTable;
use crate::tools::validate_directory_exists;
use anyhow::Result;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 圖片與其附屬文字檔
///
/// 附屬檔固定為同資料夾、同主檔名的 `.txt`，是否存在只在掃描時檢查一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub image_path: PathBuf,
    pub sidecar_path: PathBuf,
    pub sidecar_exists: bool,
    /// 原始檔名（含副檔名）
    pub original_name: String,
}

impl FilePair {
    #[must_use]
    pub fn from_image_path(image_path: PathBuf, sidecar_extension: &str) -> Self {
        let sidecar_path = image_path.with_extension(sidecar_extension);
        let sidecar_exists = sidecar_path.is_file();
        let original_name = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            image_path,
            sidecar_path,
            sidecar_exists,
            original_name,
        }
    }

    /// 原始主檔名（不含副檔名）
    #[must_use]
    pub fn original_stem(&self) -> &str {
        Path::new(&self.original_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.original_name)
    }

    /// 原始副檔名，保留大小寫
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.original_name)
            .extension()
            .and_then(|ext| ext.to_str())
    }
}

/// 遞迴掃描資料夾中的圖片，並配對附屬文字檔
///
/// 同一層的項目依檔名排序走訪，讓多次執行的掃描順序一致
pub fn scan_image_pairs(
    directory: &Path,
    file_type_table: &FileTypeTable,
) -> Result<Vec<FilePair>> {
    validate_directory_exists(directory)?;

    info!("開始掃描目錄: {}", directory.display());

    let pairs: Vec<FilePair> = WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("略過無法讀取的項目: {e}");
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter(|entry| file_type_table.is_image_file(entry.path()))
        .map(|entry| {
            let pair =
                FilePair::from_image_path(entry.into_path(), file_type_table.sidecar_extension());
            debug!(
                "找到圖片: {} (附屬檔: {})",
                pair.image_path.display(),
                if pair.sidecar_exists { "有" } else { "無" }
            );
            pair
        })
        .collect();

    info!("掃描完成，找到 {} 張圖片", pairs.len());

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    fn table() -> FileTypeTable {
        Config::new().unwrap().file_type_table
    }

    #[test]
    fn test_scan_finds_images_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let base_path = temp_dir.path();

        fs::create_dir_all(base_path.join("nested/deeper")).unwrap();
        fs::write(base_path.join("a.jpg"), "a").unwrap();
        fs::write(base_path.join("nested/b.PNG"), "b").unwrap();
        fs::write(base_path.join("nested/deeper/c.jpeg"), "c").unwrap();
        fs::write(base_path.join("notes.txt"), "not an image").unwrap();
        fs::write(base_path.join("clip.mp4"), "video").unwrap();

        let pairs = scan_image_pairs(base_path, &table()).unwrap();
        let mut names: Vec<&str> = pairs.iter().map(|p| p.original_name.as_str()).collect();
        names.sort_unstable();

        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.jpeg"]);
    }

    #[test]
    fn test_scan_detects_sidecar() {
        let temp_dir = TempDir::new().unwrap();
        let base_path = temp_dir.path();

        fs::write(base_path.join("with.jpg"), "img").unwrap();
        fs::write(base_path.join("with.txt"), "caption").unwrap();
        fs::write(base_path.join("without.png"), "img").unwrap();

        let pairs = scan_image_pairs(base_path, &table()).unwrap();
        assert_eq!(pairs.len(), 2);

        let with = pairs.iter().find(|p| p.original_name == "with.jpg").unwrap();
        assert!(with.sidecar_exists);
        assert_eq!(with.sidecar_path, base_path.join("with.txt"));

        let without = pairs.iter().find(|p| p.original_name == "without.png").unwrap();
        assert!(!without.sidecar_exists);
        assert_eq!(without.sidecar_path, base_path.join("without.txt"));
    }

    #[test]
    fn test_sidecar_path_uses_stem_with_dots() {
        let pair = FilePair::from_image_path(PathBuf::from("/data/cat.v2.jpg"), "txt");
        assert_eq!(pair.sidecar_path, PathBuf::from("/data/cat.v2.txt"));
        assert_eq!(pair.original_stem(), "cat.v2");
        assert_eq!(pair.extension(), Some("jpg"));
    }

    #[test]
    fn test_extension_keeps_case() {
        let pair = FilePair::from_image_path(PathBuf::from("/data/DOG.JPeG"), "txt");
        assert_eq!(pair.extension(), Some("JPeG"));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let pairs = scan_image_pairs(temp_dir.path(), &table()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = scan_image_pairs(&temp_dir.path().join("nope"), &table());
        assert!(result.is_err());
    }
}
