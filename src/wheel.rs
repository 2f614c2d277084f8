use crate::color::{hsl_string, Hsl};
use cached::proc_macro::cached;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelSector {
    pub hue: u16,
    pub path: String,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cx: String,
    pub cy: String,
    pub r: u32,
    pub fill: &'static str,
}

pub const BASE_MARKER_RADIUS: u32 = 6;
pub const PALETTE_MARKER_RADIUS: u32 = 4;

/// A hue wheel drawn in a `size`×`size` square, hue 0 pointing right and
/// increasing clockwise (screen coordinates, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    pub size: u32,
    pub marker_inset: f64,
}

impl Wheel {
    pub fn new(size: u32, marker_inset: f64) -> Self {
        Self { size, marker_inset }
    }

    pub fn radius(&self) -> f64 {
        self.size as f64 / 2.0
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.radius(),
            y: self.radius(),
        }
    }

    /// Hue under `point`, or `None` when the point lies outside the wheel.
    pub fn hue_at(&self, point: Point) -> Option<u16> {
        let center = self.center();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        if !dx.is_finite() || !dy.is_finite() || dx.hypot(dy) > self.radius() {
            return None;
        }
        let mut angle = dy.atan2(dx).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        Some((angle.round() as u16) % 360)
    }

    /// Where a marker for `hue` sits, `marker_inset` in from the rim.
    pub fn marker_position(&self, hue: u16) -> Point {
        let center = self.center();
        let distance = self.radius() - self.marker_inset;
        let rad = hue as f64 * PI / 180.0;
        Point {
            x: center.x + distance * rad.cos(),
            y: center.y + distance * rad.sin(),
        }
    }

    pub fn sectors(&self) -> Vec<WheelSector> {
        wheel_sectors(self.size)
    }

    /// White marker for the base color first, then a black one per palette entry.
    pub fn markers(&self, base: Hsl, palette: &[Hsl]) -> Vec<Marker> {
        std::iter::once((base.h, BASE_MARKER_RADIUS, "white"))
            .chain(palette.iter().map(|c| (c.h, PALETTE_MARKER_RADIUS, "black")))
            .map(|(hue, r, fill)| {
                let p = self.marker_position(hue);
                Marker {
                    cx: coord(p.x),
                    cy: coord(p.y),
                    r,
                    fill,
                }
            })
            .collect()
    }
}

fn coord(v: f64) -> String {
    let s = format!("{:.3}", v);
    // avoid "-0.000" in the markup
    if s == "-0.000" { "0.000".to_string() } else { s }
}

/// One sector per integer degree, each spanning `(hue - 1)°..hue°`, fully
/// saturated at half lightness.
#[cached(size = 8)]
pub fn wheel_sectors(size: u32) -> Vec<WheelSector> {
    let r = size as f64 / 2.0;
    let at = |deg: f64| {
        let rad = deg * PI / 180.0;
        (coord(r + r * rad.cos()), coord(r + r * rad.sin()))
    };
    (0..360u16)
        .map(|hue| {
            let (x0, y0) = at(hue as f64 - 1.0);
            let (x1, y1) = at(hue as f64);
            let c = coord(r);
            WheelSector {
                hue,
                path: format!("M {c} {c} L {x0} {y0} A {c} {c} 0 0 1 {x1} {y1} Z"),
                fill: hsl_string(&Hsl::new(hue as i32, 100, 50)),
            }
        })
        .collect()
}
