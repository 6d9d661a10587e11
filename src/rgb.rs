//! パック済みカラー値の展開
//!
//! パック済みの値は `0xRRGGBBAA`（上位バイトが先）で表す。
//! 24 ビットの RGB も同じ上位 3 バイトを使い、最下位バイトは無視する。

use std::fmt;

use crate::error::ColorError;

/// 0〜255 の RGB コンポーネント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// 0〜255 の RGBA コンポーネント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const fn pack(self) -> u32 {
        pack_rgb(self.red, self.green, self.blue)
    }

    pub const fn components(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn pack(self) -> u32 {
        pack_rgba(self.red, self.green, self.blue, self.alpha)
    }

    /// アルファを落とした RGB
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.red, c.green, c.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[inline]
const fn byte(value: u32, shift: u32) -> u8 {
    ((value >> shift) & 0xFF) as u8
}

/// `r << 24 | g << 16 | b << 8`
pub const fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    (red as u32) << 24 | (green as u32) << 16 | (blue as u32) << 8
}

/// `r << 24 | g << 16 | b << 8 | a`
pub const fn pack_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> u32 {
    pack_rgb(red, green, blue) | alpha as u32
}

/// パック済みの値から上位 3 バイトを取り出す。
pub const fn unhex_rgb(rgb: u32) -> Rgb {
    Rgb::new(byte(rgb, 24), byte(rgb, 16), byte(rgb, 8))
}

/// [`unhex_rgb`] の各バイトを 255 で割り、0.0〜1.0 に正規化する。
pub fn unhexf_rgb(rgb: u32) -> [f32; 3] {
    unhex_rgb(rgb).components().map(normalize)
}

/// パック済みの値から 4 バイトすべてを取り出す。
///
/// 旧実装ではアルファ付きの展開が RGB 側の引数を参照していたが、
/// ここでは 4 チャンネルとも `rgba` 自身から取り出す。
pub const fn unhex_rgba(rgba: u32) -> Rgba {
    Rgba::new(byte(rgba, 24), byte(rgba, 16), byte(rgba, 8), byte(rgba, 0))
}

/// [`unhex_rgba`] を 0.0〜1.0 に正規化したもの
pub fn unhexf_rgba(rgba: u32) -> [f32; 4] {
    let c = unhex_rgba(rgba);
    [c.red, c.green, c.blue, c.alpha].map(normalize)
}

fn normalize(b: u8) -> f32 {
    f32::from(b) / 255.0
}

/// 16 進のカラー文字列をパック済みの値に変換する。
///
/// - `#RRGGBB` / `RRGGBB` / `0xRRGGBB` → アルファ `0xFF` を補う
/// - `#RRGGBBAA` / `RRGGBBAA` / `0xRRGGBBAA` → そのまま
pub fn parse_hex(s: &str) -> Result<u32, ColorError> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(s.to_string()));
    }

    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(s.to_string()))?;
    match digits.len() {
        6 => Ok(value << 8 | 0xFF),
        8 => Ok(value),
        _ => Err(ColorError::InvalidHex(s.to_string())),
    }
}
