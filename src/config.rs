use crate::color::{hex_to_hsl, Hsl};
use crate::scheme::Scheme;
use crate::wheel::Wheel;
use anyhow::{bail, Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub default_color: String,
    pub default_scheme: String,
    pub wheel_size: u32,
    pub marker_inset: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            default_color: "#3498db".to_string(),
            default_scheme: "complementary".to_string(),
            wheel_size: 350,
            marker_inset: 10.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            // Initial page state
            default_color: env::var("DEFAULT_COLOR").unwrap_or(defaults.default_color),
            default_scheme: env::var("DEFAULT_SCHEME").unwrap_or(defaults.default_scheme),
            // Wheel drawing
            wheel_size: env::var("WHEEL_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.wheel_size),
            marker_inset: env::var("MARKER_INSET")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.marker_inset),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.default_base().context("DEFAULT_COLOR")?;
        self.scheme().context("DEFAULT_SCHEME")?;
        if self.wheel_size == 0 {
            bail!("WHEEL_SIZE must be greater than zero");
        }
        if !(0.0..self.wheel().radius()).contains(&self.marker_inset) {
            bail!("MARKER_INSET must be between 0 and the wheel radius");
        }
        Ok(())
    }

    pub fn default_base(&self) -> Result<Hsl> {
        Ok(hex_to_hsl(&self.default_color)?)
    }

    pub fn scheme(&self) -> Result<Scheme> {
        Ok(self.default_scheme.parse::<Scheme>()?)
    }

    pub fn wheel(&self) -> Wheel {
        Wheel::new(self.wheel_size, self.marker_inset)
    }
}
