//! 序號檔名產生
//!
//! 新檔名為 `{基本檔名}{補零序號}`，補零位數等於總數的十進位位數

use crate::tools::FilePair;

/// 單一圖片預計使用的新名稱
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedName {
    /// 新的主檔名（不含副檔名）
    pub new_base: String,
    pub image_name: String,
    pub sidecar_name: String,
}

/// 補零位數
#[must_use]
pub fn padding_width(total: usize) -> usize {
    total.to_string().len()
}

/// 產生序號主檔名，序號從 1 開始
#[must_use]
pub fn sequence_base_name(base_name: &str, index: usize, width: usize) -> String {
    format!("{base_name}{index:0width$}")
}

/// 依排序後的順序為每張圖片產生新名稱
///
/// 圖片沿用原本的副檔名（大小寫不變），附屬檔一律使用 `sidecar_extension`
#[must_use]
pub fn plan_names(
    pairs: &[FilePair],
    base_name: &str,
    sidecar_extension: &str,
) -> Vec<PlannedName> {
    let width = padding_width(pairs.len());

    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let new_base = sequence_base_name(base_name, i + 1, width);
            let image_name = match pair.extension() {
                Some(ext) => format!("{new_base}.{ext}"),
                None => new_base.clone(),
            };
            let sidecar_name = format!("{new_base}.{sidecar_extension}");

            PlannedName {
                new_base,
                image_name,
                sidecar_name,
            }
        })
        .collect()
}
