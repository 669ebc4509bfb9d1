//! 圖片重新命名主模組
//!
//! 協調掃描、排序、目標資料夾配置與搬移／複製的整體流程

use super::pair_sorter::PairSorter;
use super::rename_report::{PairResult, RenameReport, SidecarOutcome, TransferOutcome};
use super::reporter::Reporter;
use super::sequence_namer::{PlannedName, plan_names};
use crate::config::{Config, RunConfig};
use crate::tools::{
    Destination, FilePair, allocate_destination, scan_image_pairs, transfer_file,
    validate_base_name, validate_directory_exists,
};
use anyhow::Result;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use rust_i18n::t;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 圖片重新命名器
pub struct PairRenamer {
    config: Config,
    run_config: RunConfig,
    shutdown_signal: Arc<AtomicBool>,
    reporter: Reporter,
}

impl PairRenamer {
    pub fn new(config: Config, run_config: RunConfig, shutdown_signal: Arc<AtomicBool>) -> Self {
        let reporter = Reporter::new(run_config.quiet);
        Self {
            config,
            run_config,
            shutdown_signal,
            reporter,
        }
    }

    pub fn run(&self) -> Result<RenameReport> {
        let run = &self.run_config;

        validate_directory_exists(&run.source)?;
        validate_base_name(&run.base_name)?;

        let pairs = scan_image_pairs(&run.source, &self.config.file_type_table)?;

        if pairs.is_empty() {
            self.reporter.print_nothing_to_do();
            return Ok(RenameReport::new(0, None, run.dry_run));
        }

        let sorted_pairs = PairSorter::new(run.sort_method, run.reverse).sort(pairs);
        let destination = allocate_destination(&run.source, run.transfer_mode, run.dry_run)?;

        self.reporter.print_header(run, sorted_pairs.len(), &destination);

        let report = self.execute(&sorted_pairs, destination);
        self.reporter.print_summary(run, &report);

        info!(
            "處理完成 - 總數: {}, 成功: {}, 失敗: {}, 缺少文字檔: {}",
            report.processed(),
            report.succeeded(),
            report.failed(),
            report.missing_sidecars().len()
        );

        Ok(report)
    }

    /// 依排序結果逐一處理，單一檔案失敗不會中止整個流程
    fn execute(&self, pairs: &[FilePair], destination: Destination) -> RenameReport {
        let sidecar_extension = self.config.file_type_table.sidecar_extension();
        let planned_names = plan_names(pairs, &self.run_config.base_name, sidecar_extension);
        let progress_bar = self.reporter.progress_bar(pairs.len());

        let destination_dir = destination.path.clone();
        let mut report =
            RenameReport::new(pairs.len(), Some(destination), self.run_config.dry_run);

        for (pair, planned) in pairs.iter().zip(&planned_names) {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                info!("收到中斷訊號，停止處理");
                report.interrupted = true;
                break;
            }

            let result = self.process_pair(pair, planned, &destination_dir, &progress_bar);
            report.results.push(result);
            progress_bar.inc(1);
        }

        if report.interrupted {
            progress_bar.abandon_with_message(t!("progress.interrupted").to_string());
        } else {
            progress_bar.finish_with_message(t!("progress.done").to_string());
        }

        report
    }

    fn process_pair(
        &self,
        pair: &FilePair,
        planned: &PlannedName,
        destination_dir: &Path,
        progress_bar: &ProgressBar,
    ) -> PairResult {
        if self.run_config.dry_run {
            self.reporter
                .print_planned(progress_bar, pair, planned, destination_dir);
        }

        let image = self.transfer(&pair.image_path, &destination_dir.join(&planned.image_name));

        let sidecar = if let TransferOutcome::Failed(reason) = &image {
            self.reporter
                .warn_transfer_failed(progress_bar, &pair.original_name, reason);
            SidecarOutcome::Skipped
        } else if pair.sidecar_exists {
            let outcome =
                self.transfer(&pair.sidecar_path, &destination_dir.join(&planned.sidecar_name));
            if let TransferOutcome::Failed(reason) = &outcome {
                let sidecar_name = pair.sidecar_path.file_name().unwrap_or_default();
                self.reporter.warn_transfer_failed(
                    progress_bar,
                    &sidecar_name.to_string_lossy(),
                    reason,
                );
            }
            SidecarOutcome::Transferred(outcome)
        } else {
            self.reporter.warn_missing_sidecar(
                progress_bar,
                pair,
                self.config.file_type_table.sidecar_extension(),
            );
            SidecarOutcome::Missing
        };

        PairResult {
            original_name: pair.original_name.clone(),
            original_stem: pair.original_stem().to_string(),
            new_base: planned.new_base.clone(),
            image,
            sidecar,
        }
    }

    fn transfer(&self, source: &Path, target: &Path) -> TransferOutcome {
        if self.run_config.dry_run {
            debug!("[預覽] {} -> {}", source.display(), target.display());
            return TransferOutcome::Simulated;
        }

        match transfer_file(source, target, self.run_config.transfer_mode) {
            Ok(()) => {
                debug!("{} -> {}", source.display(), target.display());
                TransferOutcome::Done
            }
            Err(e) => {
                warn!("{e}");
                TransferOutcome::Failed(e.to_string())
            }
        }
    }
}
