use env_logger::Env;

/// 初始化日誌系統
///
/// 預設只輸出錯誤，`-v` 提高到 info，`-vv` 以上為 debug；`RUST_LOG` 優先
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "error",
        1 => "info",
        _ => "debug",
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
