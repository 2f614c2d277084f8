use crate::color::{hex_to_hsl, ColorError, Hsl};
use crate::scheme::{generate, Scheme};
use crate::wheel::{Point, Wheel};
use log::debug;

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteEvent {
    ColorInput(String),
    SchemeSelected(Scheme),
    WheelClick(Point),
}

pub struct Swatch {
    pub hex: String,
    pub label: String,
}

/// Base color, selected scheme and the palette generated from them. Never
/// mutated; [`PaletteState::update`] returns a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    pub base: Hsl,
    pub scheme: Scheme,
    pub palette: Vec<Hsl>,
}

impl PaletteState {
    pub fn new(base: Hsl, scheme: Scheme) -> Self {
        Self {
            base,
            scheme,
            palette: generate(base, scheme),
        }
    }

    pub fn from_hex(hex: &str, scheme: Scheme) -> Result<Self, ColorError> {
        Ok(Self::new(hex_to_hsl(hex)?, scheme))
    }

    /// On error the caller still holds `self`, so nothing changes.
    pub fn update(&self, event: PaletteEvent, wheel: &Wheel) -> Result<Self, ColorError> {
        match event {
            PaletteEvent::ColorInput(hex) => Self::from_hex(&hex, self.scheme),
            PaletteEvent::SchemeSelected(scheme) => Ok(Self::new(self.base, scheme)),
            PaletteEvent::WheelClick(point) => match wheel.hue_at(point) {
                Some(hue) => Ok(Self::new(self.base.with_hue(hue), self.scheme)),
                None => {
                    debug!("Click at ({}, {}) is outside the wheel", point.x, point.y);
                    Ok(self.clone())
                }
            },
        }
    }

    pub fn base_hex(&self) -> String {
        self.base.to_hex()
    }

    pub fn swatches(&self) -> Vec<Swatch> {
        self.palette
            .iter()
            .map(|c| Swatch {
                hex: c.to_hex(),
                label: c.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> Wheel {
        Wheel::new(350, 10.0)
    }

    #[test]
    fn new_generates_palette() {
        let state = PaletteState::new(Hsl::new(200, 50, 50), Scheme::Complementary);
        assert_eq!(state.palette, vec![Hsl::new(200, 50, 50), Hsl::new(20, 50, 50)]);
    }

    #[test]
    fn color_input_replaces_base() {
        let state = PaletteState::new(Hsl::new(200, 50, 50), Scheme::Triadic);
        let next = state
            .update(PaletteEvent::ColorInput("#ff0000".into()), &wheel())
            .unwrap();
        assert_eq!(next.base, Hsl::new(0, 100, 50));
        assert_eq!(next.scheme, Scheme::Triadic);
        assert_eq!(next.palette.len(), 3);
    }

    #[test]
    fn invalid_color_is_an_error() {
        let state = PaletteState::new(Hsl::new(200, 50, 50), Scheme::Triadic);
        let err = state
            .update(PaletteEvent::ColorInput("#zzz".into()), &wheel())
            .unwrap_err();
        assert_eq!(err, ColorError::InvalidFormat("#zzz".into()));
    }

    #[test]
    fn scheme_change_regenerates() {
        let state = PaletteState::new(Hsl::new(10, 50, 50), Scheme::Complementary);
        let next = state
            .update(PaletteEvent::SchemeSelected(Scheme::Monochromatic), &wheel())
            .unwrap();
        assert_eq!(next.base, state.base);
        assert_eq!(next.palette.len(), 5);
    }

    #[test]
    fn click_sets_hue_only() {
        let state = PaletteState::new(Hsl::new(10, 40, 60), Scheme::Analogous);
        let next = state
            .update(PaletteEvent::WheelClick(Point { x: 175.0, y: 300.0 }), &wheel())
            .unwrap();
        assert_eq!(next.base, Hsl::new(90, 40, 60));
        assert_eq!(next.palette[0].h, 60);
    }

    #[test]
    fn click_outside_leaves_state() {
        let state = PaletteState::new(Hsl::new(10, 40, 60), Scheme::Analogous);
        let next = state
            .update(PaletteEvent::WheelClick(Point { x: 349.0, y: 349.0 }), &wheel())
            .unwrap();
        assert_eq!(next, state);
    }

    #[test]
    fn swatches_carry_hex() {
        let state = PaletteState::new(Hsl::new(0, 100, 50), Scheme::Complementary);
        let hexes: Vec<String> = state.swatches().into_iter().map(|s| s.hex).collect();
        assert_eq!(hexes, vec!["#ff0000", "#00ffff"]);
        assert_eq!(state.base_hex(), "#ff0000");
    }
}
