use anyhow::{Context, Result};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 第二次中斷時使用的結束代碼（128 + SIGINT）
const FORCED_EXIT_CODE: i32 = 130;

/// 設定 Ctrl-C 處理器
///
/// 第一次中斷只設定旗標，讓目前的檔案處理完畢；第二次中斷立即結束程式
pub fn setup_shutdown_signal() -> Result<Arc<AtomicBool>> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        if signal_clone.swap(true, Ordering::SeqCst) {
            std::process::exit(FORCED_EXIT_CODE);
        }
        eprintln!("\n{}", t!("signal.interrupted"));
    })
    .context("無法設定 Ctrl-C 處理器")?;

    Ok(shutdown_signal)
}
