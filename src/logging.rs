use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 詳細度（`-v` の回数）からデフォルトのログレベルを決める
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// stderr へのログ出力を初期化
///
/// `RUST_LOG` が設定されていればそれを優先する。
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // 二重初期化（テストから呼ばれた場合など）は無視する
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
