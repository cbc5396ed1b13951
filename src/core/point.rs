//! Datenpunkte und Steuerpunkte der zusammengesetzten Kurve.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Bézier-Steuerpunkt (Tangenten-Handle), zwei pro Segment.
pub type ControlPoint = DVec2;

/// Fester Ankerpunkt, durch den die Kurve verläuft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Eingabe-Koordinate (z.B. Zeit in Sekunden)
    pub x: f64,
    /// Ausgabe-Koordinate (z.B. Höhe)
    pub y: f64,
    /// Optionale Beschriftung für die Anzeige
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "name")]
    pub label: Option<String>,
}

impl DataPoint {
    /// Erstellt einen unbeschrifteten Datenpunkt.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    /// Erstellt einen beschrifteten Datenpunkt.
    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }

    /// Position als Vektor.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Die vier definierenden Punkte eines kubischen Segments.
///
/// Wird nie gespeichert, sondern bei Bedarf aus Daten- und Steuerpunkten abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: DVec2,
    pub p1: DVec2,
    pub p2: DVec2,
    pub p3: DVec2,
}

impl Segment {
    /// Wertet das Segment bei Parameter `t` aus.
    pub fn evaluate(&self, t: f64) -> DVec2 {
        crate::shared::evaluate(t, self.p0, self.p1, self.p2, self.p3)
    }
}
