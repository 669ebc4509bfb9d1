//! 重新命名結果累積

use crate::tools::Destination;

/// 單一檔案的處理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Done,
    /// 預覽模式，沒有實際動作
    Simulated,
    Failed(String),
}

impl TransferOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// 附屬文字檔的處理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarOutcome {
    /// 掃描時就不存在
    Missing,
    /// 圖片處理失敗，附屬檔未處理
    Skipped,
    Transferred(TransferOutcome),
}

/// 一組圖片與附屬檔的處理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairResult {
    pub original_name: String,
    pub original_stem: String,
    pub new_base: String,
    pub image: TransferOutcome,
    pub sidecar: SidecarOutcome,
}

/// 整次執行的統計
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameReport {
    /// 掃描到的圖片數
    pub total_found: usize,
    pub results: Vec<PairResult>,
    pub destination: Option<Destination>,
    pub dry_run: bool,
    /// 收到中斷訊號而提前結束
    pub interrupted: bool,
}

impl RenameReport {
    #[must_use]
    pub fn new(total_found: usize, destination: Option<Destination>, dry_run: bool) -> Self {
        Self {
            total_found,
            results: Vec::with_capacity(total_found),
            destination,
            dry_run,
            interrupted: false,
        }
    }

    #[must_use]
    pub fn processed(&self) -> usize {
        self.results.len()
    }

    /// 圖片成功搬移或複製（預覽模式為預計處理）的數量
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.image.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.processed() - self.succeeded()
    }

    /// 尚未處理的數量（中斷時）
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total_found - self.processed()
    }

    /// 缺少附屬檔的原始主檔名，依處理順序
    #[must_use]
    pub fn missing_sidecars(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.sidecar == SidecarOutcome::Missing)
            .map(|r| r.original_stem.as_str())
            .collect()
    }

    #[must_use]
    pub fn sidecar_failures(&self) -> usize {
        self.results
            .iter()
            .filter(|r| {
                matches!(
                    r.sidecar,
                    SidecarOutcome::Transferred(TransferOutcome::Failed(_))
                )
            })
            .count()
    }
}
