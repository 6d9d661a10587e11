//! 24 ビット前景色での直接出力

use std::io::{self, Write};

use tracing::debug;

use crate::color::RESET;
use crate::error::{ColorError, Result};
use crate::format::fg_escape;
use crate::rgb::Rgb;

fn component(channel: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| ColorError::InvalidComponent { channel, value })
}

/// `text` を指定した RGB の前景色で標準出力に書き込む。
///
/// 出力は `ESC[38;2;R;G;Bm` + `text` + `ESC[0m` のみで、改行も明示的な flush も行わない。
/// 0〜255 の範囲外のコンポーネントはクランプせず [`ColorError::InvalidComponent`] を返す。
///
/// # Errors
/// 範囲外のコンポーネント、または標準出力への書き込み失敗（パイプ切断など）。
pub fn color_string(text: &str, red: i32, green: i32, blue: i32) -> Result<()> {
    let color = Rgb::new(
        component("red", red)?,
        component("green", green)?,
        component("blue", blue)?,
    );
    debug!(%color, len = text.len(), "Writing colored string to stdout");

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_color_string(&mut lock, text, color)
}

/// [`color_string`] と同じバイト列を任意の writer に書き込む。
///
/// 1 回の `write_all` で書くため、ロック済みハンドルを渡せば他スレッドの出力と混ざらない。
pub fn write_color_string<W: Write>(w: &mut W, text: &str, color: Rgb) -> Result<()> {
    let line = format!("{}{text}{RESET}", fg_escape(color));
    w.write_all(line.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 常に書き込みに失敗する writer
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_exact_bytes() {
        let mut buf = Vec::new();
        write_color_string(&mut buf, "hi", Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(buf, b"\x1b[38;2;255;0;0mhi\x1b[0m");
    }

    #[test]
    fn empty_text_still_emits_prefix_and_reset() {
        let mut buf = Vec::new();
        write_color_string(&mut buf, "", Rgb::new(0, 0, 0)).unwrap();
        assert_eq!(buf, b"\x1b[38;2;0;0;0m\x1b[0m");
    }

    #[test]
    fn consecutive_writes_do_not_add_separators() {
        let mut buf = Vec::new();
        write_color_string(&mut buf, "a", Rgb::new(1, 1, 1)).unwrap();
        write_color_string(&mut buf, "b", Rgb::new(2, 2, 2)).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\x1b[38;2;1;1;1ma\x1b[0m\x1b[38;2;2;2;2mb\x1b[0m"
        );
    }

    #[test]
    fn write_failure_is_reported() {
        let err = write_color_string(&mut ClosedPipe, "hi", Rgb::new(1, 2, 3)).unwrap_err();
        match err {
            ColorError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        let err = color_string("hi", 256, 0, 0).unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidComponent { channel: "red", value: 256 }
        ));

        let err = color_string("hi", 0, -1, 0).unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidComponent { channel: "green", value: -1 }
        ));

        let err = color_string("hi", 0, 0, 1000).unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidComponent { channel: "blue", value: 1000 }
        ));
    }

    #[test]
    fn in_range_components_write_to_stdout() {
        // color_string は範囲チェック後に write_color_string へ委譲するので、
        // バイト列は writes_exact_bytes で確認済み。ここでは stdout への書き込みが通ることだけを見る
        assert!(color_string("", 0, 128, 255).is_ok());
    }
}
