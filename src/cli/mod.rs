pub mod color;

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use rgbterm::color::{NamedColor, RESET};
use rgbterm::config::RgbtermConfig;
use rgbterm::format::{color_rgb, colorize_rgb_on, fg_escape};
use rgbterm::print::color_string;
use rgbterm::rgb::{parse_hex, unhex_rgb, unhex_rgba, unhexf_rgba};

/// ANSI カラーでテキストを表示する
#[derive(Debug, Parser)]
#[command(name = "rgbterm", version, about = "Print text in ANSI terminal colors")]
pub struct Cli {
    /// Do not print the trailing newline
    #[arg(short = 'n', long, global = true)]
    pub no_newline: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wrap text in one of the 16 named colors
    Paint {
        text: String,
        /// Color name, e.g. `red`, `light-cyan`
        #[arg(short, long, default_value = "white")]
        color: String,
    },
    /// Print text with a true-color foreground and background
    Rgb {
        text: String,
        /// Foreground as hex (`#RRGGBB`, `0xRRGGBBAA`) or a palette alias
        #[arg(long)]
        fg: String,
        /// Background; defaults to `display.background` from the config file
        #[arg(long)]
        bg: Option<String>,
    },
    /// Print text in an RGB foreground color given as three 0-255 components
    #[command(allow_negative_numbers = true)]
    Print {
        text: String,
        red: i32,
        green: i32,
        blue: i32,
    },
    /// Show the channels of a packed hex color
    Unpack {
        hex: String,
        /// Show channels normalized to 0.0-1.0
        #[arg(long)]
        float: bool,
    },
    /// List the named colors and palette aliases
    Palette,
}

/// サブコマンドを実行し、結果を `out` に書き込む。
///
/// `print` だけはライブラリの `color_string` 経由で標準出力へ直接書き込む。
pub fn run<W: Write>(cli: &Cli, config: &RgbtermConfig, out: &mut W) -> Result<()> {
    let newline = config.display.newline && !cli.no_newline;
    debug!(command = ?cli.command, newline, "Running command");

    match &cli.command {
        Command::Paint { text, color } => {
            let named: NamedColor = color.parse()?;
            write!(out, "{}", named.paint(text))?;
        }
        Command::Rgb { text, fg, bg } => {
            let fg = config
                .resolve(fg)
                .with_context(|| format!("invalid --fg {fg:?}"))?;
            let template = match bg {
                Some(bg) => {
                    let bg = config
                        .resolve(bg)
                        .with_context(|| format!("invalid --bg {bg:?}"))?;
                    color_rgb(text, fg, bg)
                }
                None => colorize_rgb_on(text, fg, config.background()),
            };
            write!(out, "{template}")?;
        }
        Command::Print {
            text,
            red,
            green,
            blue,
        } => {
            out.flush()?;
            color_string(text, *red, *green, *blue)?;
        }
        Command::Unpack { hex, float } => {
            let value = parse_hex(hex)?;
            if *float {
                let [r, g, b, a] = unhexf_rgba(value);
                write!(out, "red={r:.3} green={g:.3} blue={b:.3} alpha={a:.3}")?;
            } else {
                let c = unhex_rgba(value);
                write!(
                    out,
                    "red={} green={} blue={} alpha={}",
                    c.red, c.green, c.blue, c.alpha
                )?;
            }
        }
        Command::Palette => write_palette(config, out)?,
    }

    if newline {
        writeln!(out)?;
    }
    Ok(())
}

fn write_palette<W: Write>(config: &RgbtermConfig, out: &mut W) -> Result<()> {
    let lines: Vec<String> = NamedColor::ALL
        .iter()
        .map(|c| {
            let code = format!("{:?}", c.code());
            // 幅はエスケープを含まない色名で揃える
            let name = format!("{:<14}", c.name());
            format!("{}{}", c.paint(&name), color::dimmed(&code))
        })
        .collect();
    write!(out, "{}", lines.join("\n"))?;

    let mut aliases: Vec<(&String, &String)> = config.palette.iter().collect();
    if aliases.is_empty() {
        return Ok(());
    }
    aliases.sort();

    write!(out, "\n\n{}", color::yellow("palette:"))?;
    for (name, hex) in aliases {
        match parse_hex(hex) {
            Ok(v) => write!(out, "\n{}{name}{RESET} {hex}", fg_escape(unhex_rgb(v)))?,
            Err(e) => write!(out, "\n{name} {}", color::bold_red(&e.to_string()))?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str], config: &RgbtermConfig) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("rgbterm").chain(args.iter().copied()))?;
        let mut buf = Vec::new();
        run(&cli, config, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn paint_uses_named_table() {
        let out = run_to_string(
            &["paint", "hi", "--color", "light-red"],
            &RgbtermConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "\x1b[1;31mhi\x1b[0m\n");
    }

    #[test]
    fn paint_rejects_unknown_color() {
        let err =
            run_to_string(&["paint", "hi", "-c", "mauve"], &RgbtermConfig::default()).unwrap_err();
        assert!(err.to_string().contains("mauve"));
    }

    #[test]
    fn no_newline_flag_suppresses_newline() {
        let out =
            run_to_string(&["-n", "paint", "x", "-c", "red"], &RgbtermConfig::default()).unwrap();
        assert_eq!(out, "\x1b[0;31mx\x1b[0m");
    }

    #[test]
    fn rgb_with_bg_uses_both_colors() {
        let out = run_to_string(
            &["-n", "rgb", "X", "--fg", "#ff0000", "--bg", "0x0000ff00"],
            &RgbtermConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255mX\x1b[0m");
    }

    #[test]
    fn rgb_without_bg_uses_configured_background() {
        let config: RgbtermConfig = toml::from_str(
            r##"
[display]
background = "#010203"
newline = false

[palette]
brand = "#ff8800"
"##,
        )
        .unwrap();
        let out = run_to_string(&["rgb", "X", "--fg", "brand"], &config).unwrap();
        assert_eq!(out, "\x1b[38;2;255;136;0m\x1b[48;2;1;2;3mX\x1b[0m");
    }

    #[test]
    fn rgb_reports_bad_hex_with_context() {
        let err =
            run_to_string(&["rgb", "X", "--fg", "#zzz"], &RgbtermConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--fg"));
    }

    #[test]
    fn unpack_prints_channels() {
        let out =
            run_to_string(&["-n", "unpack", "0x11223344"], &RgbtermConfig::default()).unwrap();
        assert_eq!(out, "red=17 green=34 blue=51 alpha=68");

        let out = run_to_string(
            &["-n", "unpack", "#ff8000", "--float"],
            &RgbtermConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "red=1.000 green=0.502 blue=0.000 alpha=1.000");
    }

    #[test]
    fn print_rejects_out_of_range_components() {
        let err = run_to_string(
            &["print", "hi", "256", "0", "-1"],
            &RgbtermConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("red"));
    }

    #[test]
    fn palette_lists_every_named_color_and_aliases() {
        let config: RgbtermConfig =
            toml::from_str("[palette]\nbrand = \"#ff8800\"\nbroken = \"nope\"\n").unwrap();
        let out = run_to_string(&["palette"], &config).unwrap();
        for c in NamedColor::ALL {
            assert!(out.contains(c.name()), "missing {c}");
        }
        assert!(out.contains("\x1b[38;2;255;136;0mbrand\x1b[0m #ff8800"));
        assert!(out.contains("broken"));
    }

    #[test]
    fn palette_separates_each_name_from_its_code() {
        let out = run_to_string(&["palette"], &RgbtermConfig::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), NamedColor::ALL.len());

        for (line, c) in lines.iter().zip(NamedColor::ALL) {
            let rest = line
                .strip_prefix(c.code())
                .unwrap_or_else(|| panic!("line does not start with {c}: {line:?}"));
            let shown = rest.split(RESET).next().unwrap();
            assert_eq!(shown.trim_end(), c.name());
            assert_eq!(shown.len(), 14, "name not padded: {line:?}");
            assert!(shown.ends_with(' '), "no gap after name: {line:?}");
        }
    }
}
