//! ログ初期化モジュール
//!
//! `tracing` + `tracing-subscriber` を使用して、デバッグログを外部ファイルに出力する。
//! 標準出力には一切書かないので、色付き出力のバイト列は汚れない。

use std::path::PathBuf;

use tracing_subscriber::{fmt, EnvFilter};

/// ログの出力先ディレクトリを決定する。
///
/// 開発時は `CARGO_MANIFEST_DIR/var/logs`、それ以外は `~/.local/state/rgbterm/logs`。
fn log_dir() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        return PathBuf::from(manifest_dir).join("var").join("logs");
    }

    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".local/state/rgbterm/logs")
}

/// ログシステムを初期化する。
///
/// - ログレベルは `RGBTERM_LOG` 環境変数で制御（デフォルト: `info`）
/// - `rgbterm.log.YYYY-MM-DD` に日次ローテーションで出力
///
/// 返り値のガードは `main()` で保持し続ける必要がある（ドロップするとログ出力が停止する）。
/// ディレクトリが作れない場合は `None` を返し、ログなしで続行する。
pub fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = log_dir();

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "rgbterm: warning: failed to create log directory {}: {e}",
            log_dir.display()
        );
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "rgbterm.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env("RGBTERM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(env_filter)
        .with_writer(non_blocking)
        .with_ansi(false) // ファイル出力には ANSI カラーコードを含めない
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .try_init();

    if let Err(e) = installed {
        eprintln!("rgbterm: warning: failed to initialize logging: {e}");
        return None;
    }

    Some(guard)
}
