//! 進度與結果輸出
//!
//! 安靜模式只隱藏標頭、進度條與逐項警告，摘要與致命錯誤一律輸出

use super::rename_report::RenameReport;
use super::sequence_namer::PlannedName;
use crate::config::RunConfig;
use crate::tools::{Destination, FilePair};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rust_i18n::t;
use std::path::Path;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn print_fatal(error: &anyhow::Error) {
        eprintln!("{} {error:#}", style(t!("error_prefix")).red().bold());
    }

    pub fn print_nothing_to_do(&self) {
        println!("{}", style(t!("nothing_to_do")).yellow());
    }

    pub fn print_header(&self, run: &RunConfig, total: usize, destination: &Destination) {
        if self.quiet {
            return;
        }

        println!();
        for line in header_lines(run, total, destination) {
            println!("{line}");
        }
        println!();
    }

    #[must_use]
    pub fn progress_bar(&self, total: usize) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(total as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        progress_bar.set_message(t!("progress.running").to_string());
        progress_bar
    }

    /// 預覽模式下顯示單一檔案的預計名稱
    pub fn print_planned(
        &self,
        progress: &ProgressBar,
        pair: &FilePair,
        planned: &PlannedName,
        destination_dir: &Path,
    ) {
        if self.quiet {
            return;
        }

        let line = plan_line(pair, planned, destination_dir);
        progress.suspend(|| println!("{}", style(line).dim()));
    }

    pub fn warn_missing_sidecar(
        &self,
        progress: &ProgressBar,
        pair: &FilePair,
        sidecar_extension: &str,
    ) {
        if self.quiet {
            return;
        }

        let message = t!(
            "warning.missing_sidecar",
            file = pair.original_name,
            sidecar = format!("{}.{sidecar_extension}", pair.original_stem())
        );
        progress.suspend(|| println!("{}", style(message).yellow()));
    }

    pub fn warn_transfer_failed(&self, progress: &ProgressBar, file_name: &str, reason: &str) {
        if self.quiet {
            return;
        }

        let message = t!("warning.transfer_failed", file = file_name, error = reason);
        progress.suspend(|| println!("{}", style(message).red()));
    }

    pub fn print_summary(&self, run: &RunConfig, report: &RenameReport) {
        println!();
        println!("{}", style(t!("summary.title")).cyan().bold());
        for line in summary_lines(run, report) {
            println!("{line}");
        }
    }
}

fn sort_description(run: &RunConfig) -> String {
    if run.reverse {
        format!("{}{}", run.sort_method, t!("reversed_suffix"))
    } else {
        run.sort_method.to_string()
    }
}

/// 處理前的標頭
#[must_use]
pub fn header_lines(run: &RunConfig, total: usize, destination: &Destination) -> Vec<String> {
    let prefix = if run.dry_run {
        t!("header.dry_run_prefix").to_string()
    } else {
        String::new()
    };
    let copy_state = if run.transfer_mode.is_copy() {
        t!("header.on")
    } else {
        t!("header.off")
    };
    let destination_line = if destination.simulated {
        t!("header.destination_preview", path = destination.path.display())
    } else {
        t!("header.destination", path = destination.path.display())
    };

    vec![
        format!("{prefix}{}", t!("header.processing", count = total)),
        t!("header.sort_method", method = sort_description(run)).to_string(),
        t!("header.copy_mode", state = copy_state).to_string(),
        t!("header.base_name", base = run.base_name).to_string(),
        destination_line.to_string(),
    ]
}

/// `原檔名 -> 資料夾/新檔名`，有附屬檔時附上新的文字檔名
#[must_use]
pub fn plan_line(pair: &FilePair, planned: &PlannedName, destination_dir: &Path) -> String {
    let folder = destination_dir
        .file_name()
        .map_or_else(|| destination_dir.to_path_buf(), Into::into);
    let target = folder.join(&planned.image_name);

    if pair.sidecar_exists {
        t!(
            "plan.entry_with_sidecar",
            from = pair.original_name,
            to = target.display(),
            sidecar = planned.sidecar_name
        )
        .to_string()
    } else {
        t!("plan.entry", from = pair.original_name, to = target.display()).to_string()
    }
}

/// 結束後的摘要（不含標題）
#[must_use]
pub fn summary_lines(run: &RunConfig, report: &RenameReport) -> Vec<String> {
    let width = super::sequence_namer::padding_width(report.total_found);
    let missing = report.missing_sidecars();

    let mut lines = vec![
        t!("summary.base_name", base = run.base_name).to_string(),
        t!("summary.total", count = report.processed()).to_string(),
    ];

    let transferred = if report.dry_run {
        t!("summary.planned", count = report.succeeded())
    } else if run.transfer_mode.is_copy() {
        t!("summary.copied", count = report.succeeded())
    } else {
        t!("summary.moved", count = report.succeeded())
    };
    lines.push(transferred.to_string());

    if report.failed() > 0 {
        lines.push(t!("summary.failed", count = report.failed()).to_string());
    }
    if report.sidecar_failures() > 0 {
        lines.push(t!("summary.sidecar_failed", count = report.sidecar_failures()).to_string());
    }

    lines.push(t!("summary.missing", count = missing.len()).to_string());
    if !missing.is_empty() {
        lines.push(t!("summary.missing_list").to_string());
        lines.extend(missing.iter().map(|stem| format!("  {stem}")));
    }

    lines.push(t!("summary.sort_method", method = sort_description(run)).to_string());
    lines.push(
        t!(
            "summary.pattern",
            pattern = format!("{}{}", run.base_name, "#".repeat(width))
        )
        .to_string(),
    );

    if report.interrupted {
        lines.push(t!("summary.interrupted", count = report.remaining()).to_string());
    }

    if report.dry_run {
        lines.push(t!("summary.dry_run").to_string());
    } else if let Some(destination) = &report.destination {
        lines.push(t!("summary.destination", path = destination.path.display()).to_string());
        if run.transfer_mode.is_copy() {
            lines.push(t!("summary.originals_kept").to_string());
        }
    }

    lines
}
