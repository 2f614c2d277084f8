use askama::Template;
use crate::scheme::Scheme;
use crate::state::Swatch;
use crate::wheel::{Marker, WheelSector};

pub struct SchemeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl SchemeOption {
    pub fn all(selected: Scheme) -> Vec<SchemeOption> {
        Scheme::ALL
            .iter()
            .map(|s| SchemeOption {
                value: s.as_str(),
                label: s.label(),
                selected: *s == selected,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "wheel.svg")]
pub struct WheelSvgTemplate {
    pub size: u32,
    pub sectors: Vec<WheelSector>,
    pub markers: Vec<Marker>,
}

#[derive(Template)]
#[template(path = "palette.html")]
pub struct PaletteHtmlTemplate {
    pub color: String,
    pub scheme_options: Vec<SchemeOption>,
    pub swatches: Vec<Swatch>,
    pub wheel_url: String,
    pub wheel_size: u32,
    pub error: String,
}
