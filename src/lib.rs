//! ANSI 端末向けの色付きテキスト出力
//!
//! - [`color`]: 16 色の名前付き定数テーブルと `colorize`
//! - [`rgb`]: パック済み RGB(A) 値の展開
//! - [`format`]: 前景色・背景色を組み合わせたテンプレートの構築
//! - [`print`]: 24 ビット前景色での標準出力への書き込み
//!
//! 端末の対応状況の判定や非 ANSI 端末へのフォールバックは行わない。

pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod print;
pub mod rgb;

pub use color::{colorize, NamedColor, RESET};
pub use error::ColorError;
pub use format::{color_rgb, colorize_rgb, ColorTemplate};
pub use print::{color_string, write_color_string};
pub use rgb::{unhex_rgb, unhex_rgba, unhexf_rgb, unhexf_rgba, Rgb, Rgba};
