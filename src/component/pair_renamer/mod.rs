//! 圖片與文字檔依序重新命名元件
//!
//! 掃描圖片與同名的 .txt 附屬檔，排序後以連續編號搬移或複製到新資料夾

mod main;
mod pair_sorter;
mod rename_report;
mod reporter;
mod sequence_namer;

pub use main::PairRenamer;
pub use pair_sorter::PairSorter;
pub use rename_report::{PairResult, RenameReport, SidecarOutcome, TransferOutcome};
pub use reporter::{Reporter, header_lines, plan_line, summary_lines};
pub use sequence_namer::{PlannedName, padding_width, plan_names, sequence_base_name};
