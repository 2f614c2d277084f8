//! Color palette generator: hex/HSL conversion, harmony schemes and a
//! clickable hue wheel served over HTTP.

pub mod api;
pub mod color;
pub mod config;
pub mod scheme;
pub mod state;
pub mod templates;
pub mod wheel;

pub use color::{hex_to_hsl, hsl_to_hex, ColorError, Hsl, Rgb};
pub use scheme::{generate, Scheme, SchemeError};
pub use state::{PaletteEvent, PaletteState};
pub use wheel::{Point, Wheel};
