use crate::color::Hsl;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("unknown harmony scheme '{0}'")]
    UnknownScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Monochromatic,
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::Monochromatic,
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::Tetradic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Monochromatic => "monochromatic",
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::Tetradic => "tetradic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scheme::Monochromatic => "Monochromatic",
            Scheme::Complementary => "Complementary",
            Scheme::Analogous => "Analogous",
            Scheme::Triadic => "Triadic",
            Scheme::Tetradic => "Tetradic",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SchemeError::UnknownScheme(s.to_string()))
    }
}

/// Lightness ladder used by the monochromatic scheme.
pub const MONOCHROMATIC_STEPS: [u8; 5] = [20, 35, 50, 65, 80];

/// Builds the palette for `scheme` around `base`. Every scheme except
/// monochromatic keeps the base saturation and lightness and only rotates hue.
pub fn generate(base: Hsl, scheme: Scheme) -> Vec<Hsl> {
    match scheme {
        Scheme::Monochromatic => MONOCHROMATIC_STEPS
            .iter()
            .map(|&l| base.with_lightness(l))
            .collect(),
        Scheme::Complementary => vec![base, base.rotate(180)],
        Scheme::Analogous => vec![base.rotate(330), base, base.rotate(30)],
        Scheme::Triadic => vec![base, base.rotate(120), base.rotate(240)],
        Scheme::Tetradic => vec![base, base.rotate(90), base.rotate(180), base.rotate(270)],
    }
}
