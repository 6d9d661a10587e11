//! 前景色・背景色をまとめて指定するフォーマットビルダー
//!
//! テンプレート文字列と、そこに順に埋め込む引数列を [`ColorTemplate`] として
//! 一体で返す。呼び出し側が両者を取り違えることはない。
//!
//! テンプレート中の `{}` が引数 1 つに対応し、テキスト中の波括弧は
//! `{{` / `}}` にエスケープされる。

use std::fmt;

use tracing::trace;

use crate::color::RESET;
use crate::rgb::{unhex_rgb, Rgb};

/// 前景色だけを指定したときに組み合わせる中間グレーの背景
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(55, 55, 55);

const FG_PLACEHOLDER: &str = "\x1b[38;2;{};{};{}m";
const BG_PLACEHOLDER: &str = "\x1b[48;2;{};{};{}m";

/// 24 ビット前景色のエスケープシーケンス
pub fn fg_escape(c: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", c.red, c.green, c.blue)
}

/// 24 ビット背景色のエスケープシーケンス
pub fn bg_escape(c: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", c.red, c.green, c.blue)
}

/// テンプレート + 引数列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTemplate {
    template: String,
    args: Vec<u8>,
}

impl ColorTemplate {
    pub fn template(&self) -> &str {
        &self.template
    }

    /// テンプレートの `{}` に順に埋め込むコンポーネント値
    pub fn args(&self) -> &[u8] {
        &self.args
    }

    /// 引数を埋め込んだ最終的な文字列を返す。
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.template.len() + self.args.len() * 3);
        let mut args = self.args.iter();
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            match (c, chars.peek()) {
                ('{', Some('{')) | ('}', Some('}')) => {
                    chars.next();
                    out.push(c);
                }
                ('{', Some('}')) => {
                    chars.next();
                    // 引数の数はビルダーがテンプレートと同時に決めている
                    if let Some(arg) = args.next() {
                        out.push_str(&arg.to_string());
                    }
                }
                _ => out.push(c),
            }
        }
        out
    }
}

impl fmt::Display for ColorTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// `rgba` の前景色を [`DEFAULT_BACKGROUND`] の上に載せる。
pub fn colorize_rgb(text: &str, rgba: u32) -> ColorTemplate {
    colorize_rgb_on(text, rgba, DEFAULT_BACKGROUND)
}

/// [`colorize_rgb`] の背景色を差し替え可能にしたもの。
///
/// 背景はテンプレートに直接埋め込まれ、引数列には前景の 3 値だけが入る。
pub fn colorize_rgb_on(text: &str, rgba: u32, background: Rgb) -> ColorTemplate {
    let fg = unhex_rgb(rgba);
    trace!(%fg, %background, "Building single-color template");

    ColorTemplate {
        template: format!(
            "{FG_PLACEHOLDER}{}{}{RESET}",
            bg_escape(background),
            escape_braces(text)
        ),
        args: fg.components().to_vec(),
    }
}

/// 前景色と背景色を両方パック済みの値で指定する。
///
/// 引数列は前景 r, g, b、背景 r, g, b の順。
pub fn color_rgb(text: &str, fg: u32, bg: u32) -> ColorTemplate {
    let fg = unhex_rgb(fg);
    let bg = unhex_rgb(bg);
    trace!(%fg, %bg, "Building fg/bg template");

    let mut args = Vec::with_capacity(6);
    args.extend_from_slice(&fg.components());
    args.extend_from_slice(&bg.components());

    ColorTemplate {
        template: format!("{FG_PLACEHOLDER}{BG_PLACEHOLDER}{}{RESET}", escape_braces(text)),
        args,
    }
}
