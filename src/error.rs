//! エラー型
//!
//! ライブラリ関数はすべて [`ColorError`] を返す。
//! バイナリ側では `anyhow` でラップしてコンテキストを付与する。

use thiserror::Error;

/// rgbterm のエラー
#[derive(Debug, Error)]
pub enum ColorError {
    /// 0〜255 の範囲外のカラーコンポーネント
    #[error("{channel} component out of range (0-255): {value}")]
    InvalidComponent {
        /// チャンネル名（"red" / "green" / "blue"）
        channel: &'static str,
        /// 渡された値
        value: i32,
    },

    /// 16 進カラー文字列として解釈できない入力
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// 未知の色名
    #[error("unknown color name: {0:?}")]
    UnknownColor(String),

    /// 標準出力などへの書き込み失敗
    #[error("failed to write colored output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_component_message_names_channel() {
        let e = ColorError::InvalidComponent {
            channel: "green",
            value: 300,
        };
        assert_eq!(e.to_string(), "green component out of range (0-255): 300");
    }

    #[test]
    fn io_error_converts_with_question_mark() {
        fn fails() -> Result<()> {
            let written: std::io::Result<()> =
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
            written?;
            Ok(())
        }
        assert!(matches!(fails(), Err(ColorError::Io(_))));
    }
}
