//! 圖片排序模組
//!
//! 依檔名、建立時間或修改時間排序，相同鍵值保留掃描順序

use crate::config::SortMethod;
use crate::tools::FilePair;
use log::debug;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// 圖片排序器
#[derive(Debug, Clone, Copy)]
pub struct PairSorter {
    method: SortMethod,
    reverse: bool,
}

impl PairSorter {
    #[must_use]
    pub const fn new(method: SortMethod, reverse: bool) -> Self {
        Self { method, reverse }
    }

    /// 穩定排序後，若要求反向則將整個結果倒轉
    ///
    /// 因此反向時相同鍵值的項目也會以掃描順序的反向出現
    #[must_use]
    pub fn sort(&self, mut pairs: Vec<FilePair>) -> Vec<FilePair> {
        match self.method {
            SortMethod::Name => pairs.sort_by(|a, b| a.original_name.cmp(&b.original_name)),
            SortMethod::Created => pairs.sort_by_cached_key(|pair| created_time(&pair.image_path)),
            SortMethod::Modified => {
                pairs.sort_by_cached_key(|pair| modified_time(&pair.image_path));
            }
        }

        if self.reverse {
            pairs.reverse();
        }

        debug!(
            "排序完成: {}{}，共 {} 項",
            self.method,
            if self.reverse { " (反向)" } else { "" },
            pairs.len()
        );

        pairs
    }
}

/// 建立時間；平台不支援時改用修改時間
fn created_time(path: &Path) -> Option<SystemTime> {
    let metadata = fs::metadata(path).ok()?;
    metadata.created().or_else(|_| metadata.modified()).ok()
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|metadata| metadata.modified()).ok()
}
