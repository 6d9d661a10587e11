//! 設定ファイル管理
//!
//! `~/.config/rgbterm/config.toml` から TOML 形式の設定を読み込む。
//! ファイルが存在しない場合はデフォルト値を使用する。
//!
//! # 設定ファイル例
//!
//! ```toml
//! [display]
//! background = "#373737"
//! newline = true
//!
//! [palette]
//! brand = "#ff8800"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::ColorError;
use crate::format::DEFAULT_BACKGROUND;
use crate::rgb::{parse_hex, unhex_rgb, Rgb};

/// rgbterm の設定全体
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RgbtermConfig {
    /// 表示関連設定
    pub display: DisplayConfig,
    /// 色のエイリアス（キー: 名前、値: 16 進カラー文字列）
    pub palette: HashMap<String, String>,
}

/// 表示関連の設定
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `--bg` 省略時の背景色
    pub background: String,
    /// 出力の末尾に改行を付けるか
    pub newline: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            newline: true,
        }
    }
}

const TEMPLATE: &str = r##"# rgbterm configuration
#
# You can write setting like this:

[display]
# background = "#373737"
# newline = true

[palette]
# brand = "#ff8800"
"##;

impl RgbtermConfig {
    /// 設定ファイルを読み込む。
    ///
    /// 存在しなければテンプレートを生成してデフォルト値を返す。
    /// 読み込み・パースに失敗した場合は警告を表示してデフォルト値を返す。
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        debug!(path = %path.display(), "Loading config file");

        if !path.exists() {
            Self::create_default_config(path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RgbtermConfig>(&content) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        background = %config.display.background,
                        palette_count = config.palette.len(),
                        "Config loaded successfully"
                    );
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    eprintln!("rgbterm: warning: failed to parse config file: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read config file");
                eprintln!("rgbterm: warning: failed to read config file: {e}");
                Self::default()
            }
        }
    }

    /// 設定ファイルのパス。`$HOME` が取得できなければカレントディレクトリ基準。
    pub fn config_path() -> PathBuf {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".config/rgbterm/config.toml")
    }

    /// 背景色。設定値が不正なら警告してデフォルトのグレーを使う。
    pub fn background(&self) -> Rgb {
        match parse_hex(&self.display.background) {
            Ok(v) => unhex_rgb(v),
            Err(e) => {
                warn!(error = %e, "Invalid display.background, using default");
                DEFAULT_BACKGROUND
            }
        }
    }

    /// パレットのエイリアス、または 16 進文字列をパック済みの値に解決する。
    pub fn resolve(&self, color: &str) -> Result<u32, ColorError> {
        match self.palette.get(color) {
            Some(hex) => {
                debug!(alias = color, hex = %hex, "Resolved palette alias");
                parse_hex(hex)
            }
            None => parse_hex(color),
        }
    }

    /// 親ディレクトリごとテンプレートを生成する。失敗しても起動は継続する。
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "Failed to create config directory");
                eprintln!("rgbterm: warning: failed to create config directory: {e}");
                return;
            }
        }

        match std::fs::write(path, TEMPLATE) {
            Ok(()) => {
                info!(path = %path.display(), "Created default config file");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to create default config file");
                eprintln!("rgbterm: warning: failed to create config file: {e}");
            }
        }
    }
}
