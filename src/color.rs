use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue in degrees `0..360`, saturation and lightness in percent `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Wraps the hue into `0..360` and clamps saturation and lightness to 100.
    pub fn new(h: i32, s: u8, l: u8) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Same saturation and lightness, hue shifted by `degrees`.
    pub fn rotate(&self, degrees: i32) -> Self {
        Self::new(self.h as i32 + degrees, self.s, self.l)
    }

    pub fn with_hue(&self, h: u16) -> Self {
        Self::new(h as i32, self.s, self.l)
    }

    pub fn with_lightness(&self, l: u8) -> Self {
        Self::new(self.h as i32, self.s, l)
    }

    pub fn to_hex(&self) -> String {
        hsl_to_hex(self.h as f64, self.s as f64, self.l as f64)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// CSS notation, e.g. `hsl(120, 100%, 50%)`.
pub fn hsl_string(hsl: &Hsl) -> String {
    hsl.to_string()
}

pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidFormat(hex.to_string());
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Standard RGB to HSL, every component rounded to an integer.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    let (h, s);
    if d == 0.0 {
        h = 0.0;
        s = 0.0;
    } else {
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;
    }
    // a hue just under 360 rounds up to 360, which is 0
    Hsl::new(
        (h * 360.0).round() as i32,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let scale = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: scale(r),
        g: scale(g),
        b: scale(b),
    }
}

/// Hue is taken modulo 360 before the sextant is picked.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_string()
}
