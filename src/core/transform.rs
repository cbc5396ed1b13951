//! Koordinaten-Transformation zwischen Domänen- und Speicher-Raum.
//!
//! Der Steuerpunkt-Generator legt seine Ergebnisse im Speicher-Raum ab
//! (z.B. SVG-Koordinaten des Editors). Abfragen laufen im Domänen-Raum,
//! deshalb braucht jede Transformation auch die Umkehrung.

use super::DataPoint;
use crate::shared::CurveOptions;
use glam::DVec2;

/// Achsenweise, monotone Abbildung Domäne ↔ Speicher.
pub trait CoordinateTransform: std::fmt::Debug {
    /// Domänen-x → Speicher-x
    fn to_storage_x(&self, x: f64) -> f64;
    /// Domänen-y → Speicher-y
    fn to_storage_y(&self, y: f64) -> f64;
    /// Speicher-x → Domänen-x
    fn from_storage_x(&self, x: f64) -> f64;
    /// Speicher-y → Domänen-y
    fn from_storage_y(&self, y: f64) -> f64;

    /// Wendet die Hin-Transformation auf beide Achsen an.
    fn to_storage(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.to_storage_x(p.x), self.to_storage_y(p.y))
    }

    /// Wendet die Rück-Transformation auf beide Achsen an.
    fn from_storage(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.from_storage_x(p.x), self.from_storage_y(p.y))
    }
}

/// Speicher-Raum = Domänen-Raum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdentityTransform;

impl CoordinateTransform for IdentityTransform {
    fn to_storage_x(&self, x: f64) -> f64 {
        x
    }

    fn to_storage_y(&self, y: f64) -> f64 {
        y
    }

    fn from_storage_x(&self, x: f64) -> f64 {
        x
    }

    fn from_storage_y(&self, y: f64) -> f64 {
        y
    }
}

/// Lineare Achse: Intervall `[min, max]` → Pixel ab `origin` mit Länge `extent`.
///
/// Ein negativer `extent` spiegelt die Achse (Bildschirm-y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    min: f64,
    max: f64,
    origin: f64,
    extent: f64,
}

impl Axis {
    fn span(&self) -> f64 {
        self.max - self.min
    }

    fn forward(&self, v: f64) -> f64 {
        let span = self.span();
        if span.abs() < f64::EPSILON {
            return self.origin;
        }
        self.origin + (v - self.min) / span * self.extent
    }

    fn inverse(&self, v: f64) -> f64 {
        if self.extent.abs() < f64::EPSILON {
            return self.min;
        }
        self.min + (v - self.origin) / self.extent * self.span()
    }
}

/// Diagramm-Abbildung auf eine SVG-Zeichenfläche mit Rändern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTransform {
    x_axis: Axis,
    y_axis: Axis,
}

impl ChartTransform {
    /// Erstellt die Abbildung aus expliziten Achsenbereichen und Zeichenfläche.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), options: &CurveOptions) -> Self {
        let pad = &options.padding;
        let drawable_width = options.svg_width - pad.left - pad.right;
        let drawable_height = options.svg_height - pad.top - pad.bottom;
        Self {
            x_axis: Axis {
                min: x_range.0,
                max: x_range.1,
                origin: pad.left,
                extent: drawable_width,
            },
            y_axis: Axis {
                min: y_range.0,
                max: y_range.1,
                origin: options.svg_height - pad.bottom,
                extent: -drawable_height,
            },
        }
    }

    /// Leitet die Achsenbereiche aus den Datenpunkten und den Achsen-Untergrenzen ab.
    pub fn fit(points: &[DataPoint], options: &CurveOptions) -> Self {
        let x_min = points
            .iter()
            .map(|p| p.x)
            .fold(options.axis_x_min_floor, f64::min);
        let x_max = points
            .iter()
            .map(|p| p.x)
            .fold(options.axis_x_max_floor, f64::max);
        let y_max = points
            .iter()
            .map(|p| p.y)
            .fold(options.axis_y_max_floor, f64::max);
        Self::new((x_min, x_max), (options.axis_y_min, y_max), options)
    }

    /// Achsenbereich der Zeitachse (Domäne).
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_axis.min, self.x_axis.max)
    }

    /// Achsenbereich der Höhenachse (Domäne).
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_axis.min, self.y_axis.max)
    }
}

impl CoordinateTransform for ChartTransform {
    fn to_storage_x(&self, x: f64) -> f64 {
        self.x_axis.forward(x)
    }

    fn to_storage_y(&self, y: f64) -> f64 {
        self.y_axis.forward(y)
    }

    fn from_storage_x(&self, x: f64) -> f64 {
        self.x_axis.inverse(x)
    }

    fn from_storage_y(&self, y: f64) -> f64 {
        self.y_axis.inverse(y)
    }
}
