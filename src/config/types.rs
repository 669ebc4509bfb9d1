use crate::error::RenameError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 預設的重新命名基本檔名
pub const DEFAULT_BASE_NAME: &str = "Image";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
    #[serde(rename = "SIDECAR_FILE")]
    pub sidecar_file: String,
}

impl FileTypeTable {
    #[must_use]
    pub fn is_image_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let dotted = format!(".{ext}");
                self.image_file
                    .iter()
                    .any(|image_ext| image_ext.eq_ignore_ascii_case(&dotted))
            })
    }

    /// 附屬文字檔的副檔名（不含前導點）
    #[must_use]
    pub fn sidecar_extension(&self) -> &str {
        self.sidecar_file.trim_start_matches('.')
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
}

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMethod {
    /// 依檔名
    Name,
    /// 依建立時間
    Created,
    /// 依修改時間
    #[default]
    Modified,
}

impl SortMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Created => "created",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMethod {
    type Err = RenameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "created" => Ok(Self::Created),
            "modified" => Ok(Self::Modified),
            other => Err(RenameError::UnknownSortMethod(other.to_string())),
        }
    }
}

/// 搬移或複製
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    #[default]
    Move,
    Copy,
}

impl TransferMode {
    /// 目標資料夾的基本名稱
    #[must_use]
    pub const fn folder_label(self) -> &'static str {
        match self {
            Self::Move => "Renamed",
            Self::Copy => "Copied",
        }
    }

    #[must_use]
    pub const fn is_copy(self) -> bool {
        matches!(self, Self::Copy)
    }
}

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "en-US", alias = "en")]
    EnUs,
    #[value(name = "zh-TW", alias = "zh")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn locale(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

/// 單次執行的設定，建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: PathBuf,
    pub base_name: String,
    pub sort_method: SortMethod,
    pub reverse: bool,
    pub transfer_mode: TransferMode,
    pub dry_run: bool,
    pub quiet: bool,
}

impl RunConfig {
    /// 以預設值建立設定：基本檔名 `Image`、依修改時間排序、搬移模式
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            base_name: DEFAULT_BASE_NAME.to_string(),
            sort_method: SortMethod::default(),
            reverse: false,
            transfer_mode: TransferMode::default(),
            dry_run: false,
            quiet: false,
        }
    }
}
