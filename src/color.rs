//! 名前付きカラー定数テーブル
//!
//! 16 色の前景色エスケープシーケンスとリセットシーケンスを定数として公開する。
//! 値はすべてコンパイル時に確定するリテラルで、実行時に変更されることはない。

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

pub const BLACK: &str = "\x1b[0;30m";
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const ORANGE: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const PURPLE: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";
pub const LIGHT_GRAY: &str = "\x1b[0;37m";
pub const DARK_GRAY: &str = "\x1b[1;30m";
pub const LIGHT_RED: &str = "\x1b[1;31m";
pub const LIGHT_GREEN: &str = "\x1b[1;32m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const LIGHT_BLUE: &str = "\x1b[1;34m";
pub const LIGHT_PURPLE: &str = "\x1b[1;35m";
pub const LIGHT_CYAN: &str = "\x1b[1;36m";
pub const WHITE: &str = "\x1b[1;37m";

/// 端末の表示属性をデフォルトに戻すシーケンス
pub const RESET: &str = "\x1b[0m";

/// リテラル同士をコンパイル時に連結して色付き文字列リテラルを作る。
///
/// 色には文字列リテラルを渡す必要がある（`concat!` は定数名を受け付けない）。
///
/// ```
/// const WARN: &str = rgbterm::colorize!("warning", "\x1b[1;33m");
/// assert_eq!(WARN, "\x1b[1;33mwarning\x1b[0m");
/// ```
#[macro_export]
macro_rules! colorize {
    ($text:literal, $color:literal) => {
        concat!($color, $text, "\x1b[0m")
    };
}

/// `color + text + RESET` を返す。
///
/// 入れ子やネストしたリセットは扱わない。`text` 中に別のリセットがあれば、
/// そこから先は色が外れる。
pub fn colorize(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// テーブル上の 16 色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Orange,
    Blue,
    Purple,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    Yellow,
    LightBlue,
    LightPurple,
    LightCyan,
    White,
}

impl NamedColor {
    /// テーブル順の全色
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Orange,
        NamedColor::Blue,
        NamedColor::Purple,
        NamedColor::Cyan,
        NamedColor::LightGray,
        NamedColor::DarkGray,
        NamedColor::LightRed,
        NamedColor::LightGreen,
        NamedColor::Yellow,
        NamedColor::LightBlue,
        NamedColor::LightPurple,
        NamedColor::LightCyan,
        NamedColor::White,
    ];

    /// 対応するエスケープシーケンス定数を返す。
    pub const fn code(self) -> &'static str {
        match self {
            NamedColor::Black => BLACK,
            NamedColor::Red => RED,
            NamedColor::Green => GREEN,
            NamedColor::Orange => ORANGE,
            NamedColor::Blue => BLUE,
            NamedColor::Purple => PURPLE,
            NamedColor::Cyan => CYAN,
            NamedColor::LightGray => LIGHT_GRAY,
            NamedColor::DarkGray => DARK_GRAY,
            NamedColor::LightRed => LIGHT_RED,
            NamedColor::LightGreen => LIGHT_GREEN,
            NamedColor::Yellow => YELLOW,
            NamedColor::LightBlue => LIGHT_BLUE,
            NamedColor::LightPurple => LIGHT_PURPLE,
            NamedColor::LightCyan => LIGHT_CYAN,
            NamedColor::White => WHITE,
        }
    }

    /// kebab-case の色名（`"light-gray"` など）
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Orange => "orange",
            NamedColor::Blue => "blue",
            NamedColor::Purple => "purple",
            NamedColor::Cyan => "cyan",
            NamedColor::LightGray => "light-gray",
            NamedColor::DarkGray => "dark-gray",
            NamedColor::LightRed => "light-red",
            NamedColor::LightGreen => "light-green",
            NamedColor::Yellow => "yellow",
            NamedColor::LightBlue => "light-blue",
            NamedColor::LightPurple => "light-purple",
            NamedColor::LightCyan => "light-cyan",
            NamedColor::White => "white",
        }
    }

    pub fn paint(self, text: &str) -> String {
        colorize(text, self.code())
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 大文字小文字を区別せず、`light-gray` / `light_gray` / `lightgray` のいずれも受け付ける。
impl FromStr for NamedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        NamedColor::ALL
            .into_iter()
            .find(|c| c.name().replace('-', "") == normalized)
            .ok_or_else(|| ColorError::UnknownColor(s.to_string()))
    }
}

pub fn black(text: &str) -> String {
    colorize(text, BLACK)
}

pub fn red(text: &str) -> String {
    colorize(text, RED)
}

pub fn green(text: &str) -> String {
    colorize(text, GREEN)
}

pub fn orange(text: &str) -> String {
    colorize(text, ORANGE)
}

pub fn blue(text: &str) -> String {
    colorize(text, BLUE)
}

pub fn purple(text: &str) -> String {
    colorize(text, PURPLE)
}

pub fn cyan(text: &str) -> String {
    colorize(text, CYAN)
}

pub fn light_gray(text: &str) -> String {
    colorize(text, LIGHT_GRAY)
}

pub fn dark_gray(text: &str) -> String {
    colorize(text, DARK_GRAY)
}

pub fn light_red(text: &str) -> String {
    colorize(text, LIGHT_RED)
}

pub fn light_green(text: &str) -> String {
    colorize(text, LIGHT_GREEN)
}

pub fn yellow(text: &str) -> String {
    colorize(text, YELLOW)
}

pub fn light_blue(text: &str) -> String {
    colorize(text, LIGHT_BLUE)
}

pub fn light_purple(text: &str) -> String {
    colorize(text, LIGHT_PURPLE)
}

pub fn light_cyan(text: &str) -> String {
    colorize(text, LIGHT_CYAN)
}

pub fn white(text: &str) -> String {
    colorize(text, WHITE)
}
