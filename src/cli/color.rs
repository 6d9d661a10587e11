//! CLI 自身のメッセージ用スタイル
//!
//! ライブラリの固定テーブルとは別に、エラー表示などには `nu_ansi_term` を使う。

use nu_ansi_term::{Color, Style};

fn styled(color: Color, text: &str, is_bold: bool) -> String {
    let style = if is_bold {
        color.bold()
    } else {
        Style::new().fg(color)
    };
    style.paint(text).to_string()
}

pub fn bold_red(text: &str) -> String {
    styled(Color::LightRed, text, true)
}

pub fn yellow(text: &str) -> String {
    styled(Color::Yellow, text, false)
}

pub fn dimmed(text: &str) -> String {
    Style::new().dimmed().paint(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_wrap_text_and_reset() {
        for s in [bold_red("x"), yellow("x"), dimmed("x")] {
            assert!(s.starts_with('\x1b'));
            assert!(s.contains('x'));
            assert!(s.ends_with("\x1b[0m"));
        }
    }
}
