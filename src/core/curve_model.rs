//! Das zentrale Kurvenmodell: Datenpunkte, Steuerpunkte und deren Erzeugung.

use super::{ChartTransform, ControlPoint, CoordinateTransform, CurveEvent, DataPoint, Segment};
use crate::shared::spline_geometry::{linear_control_pair, linear_control_point, linear_factor};
use crate::shared::{height_at_time_with, spline_geometry, CurveOptions, SolverSettings};

/// Zusammengesetzte kubische Bézier-Kurve durch geordnete Datenpunkte.
///
/// Besitzt beide Punktfolgen exklusiv. Für n Datenpunkte gibt es nach der
/// Initialisierung genau 2·(n−1) Steuerpunkte; das Paar (2i, 2i+1) gehört
/// zum Segment zwischen Datenpunkt i und i+1. Steuerpunkte liegen im
/// Speicher-Raum der Transformation, Datenpunkte im Domänen-Raum.
#[derive(Debug)]
pub struct CurveModel {
    /// Ankerpunkte mit streng steigendem x
    points: Vec<DataPoint>,
    /// Tangenten-Handles im Speicher-Raum
    control_points: Vec<ControlPoint>,
    transform: Box<dyn CoordinateTransform>,
    /// Zählt jede tatsächliche Änderung
    revision: u64,
    /// Noch nicht abgeholte Änderungs-Events
    events: Vec<CurveEvent>,
}

impl CurveModel {
    /// Erstellt ein Modell ohne Steuerpunkte.
    ///
    /// Schlägt fehl, wenn die x-Werte nicht streng steigen oder eine
    /// Koordinate nicht endlich ist. Weniger als zwei Punkte sind erlaubt
    /// (degenerierte Kurve).
    pub fn new(
        points: Vec<DataPoint>,
        transform: impl CoordinateTransform + 'static,
    ) -> anyhow::Result<Self> {
        validate_points(&points)?;
        Ok(Self {
            points,
            control_points: Vec::new(),
            transform: Box::new(transform),
            revision: 0,
            events: Vec::new(),
        })
    }

    /// Erstellt ein Modell mit Diagramm-Transformation und initialisiert die Steuerpunkte.
    pub fn with_chart(points: Vec<DataPoint>, options: &CurveOptions) -> anyhow::Result<Self> {
        let transform = ChartTransform::fit(&points, options);
        let mut model = Self::new(points, transform)?;
        model.initialize_control_points();
        Ok(model)
    }

    // ── Lesezugriff ─────────────────────────────────────────────

    /// Alle Datenpunkte (Domänen-Raum).
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Alle Steuerpunkte (Speicher-Raum).
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Die verwendete Koordinaten-Transformation.
    pub fn transform(&self) -> &dyn CoordinateTransform {
        self.transform.as_ref()
    }

    /// Anzahl der Segmente (n−1, 0 bei weniger als zwei Punkten).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Soll-Anzahl der Steuerpunkte: 2·(n−1).
    pub fn expected_control_point_count(&self) -> usize {
        2 * self.segment_count()
    }

    /// Zeitbereich der Datenpunkte.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// Segment `index` im Speicher-Raum (für das Zeichnen).
    pub fn segment(&self, index: usize) -> Option<Segment> {
        let start = self.points.get(index)?;
        let end = self.points.get(index + 1)?;
        Some(Segment {
            p0: self.transform.to_storage(start.position()),
            p1: *self.control_points.get(index * 2)?,
            p2: *self.control_points.get(index * 2 + 1)?,
            p3: self.transform.to_storage(end.position()),
        })
    }

    /// Steuerpunkte zurück in den Domänen-Raum abgebildet.
    pub fn domain_control_points(&self) -> Vec<ControlPoint> {
        self.control_points
            .iter()
            .map(|cp| self.transform.from_storage(*cp))
            .collect()
    }

    /// Höhe zum Zeitpunkt `time` (Domänen-Raum, Standard-Solver).
    pub fn height_at_time(&self, time: f64) -> f64 {
        self.height_at_time_with(time, SolverSettings::default())
    }

    /// Höhe zum Zeitpunkt `time` mit expliziten Solver-Parametern.
    pub fn height_at_time_with(&self, time: f64, settings: SolverSettings) -> f64 {
        height_at_time_with(time, &self.points, &self.domain_control_points(), settings)
    }

    // ── Änderungen ──────────────────────────────────────────────

    /// Setzt alle Steuerpunkte auf 1/4 und 3/4 der Sehne jedes Segments.
    ///
    /// Nur wirksam solange noch keine Steuerpunkte existieren.
    pub fn initialize_control_points(&mut self) {
        if !self.control_points.is_empty() || self.points.len() < 2 {
            return;
        }

        let mut control_points = Vec::with_capacity(self.expected_control_point_count());
        for w in self.points.windows(2) {
            let (cp1, cp2) = linear_control_pair(w[0].position(), w[1].position());
            control_points.push(self.transform.to_storage(cp1));
            control_points.push(self.transform.to_storage(cp2));
        }
        self.control_points = control_points;

        log::debug!(
            "{} Steuerpunkte initialisiert ({} Segmente)",
            self.control_points.len(),
            self.segment_count()
        );
        self.notify(CurveEvent::ControlPointsInitialized);
    }

    /// Überschreibt Steuerpunkt `index` (Speicher-Raum).
    ///
    /// Ungültige Indizes werden still ignoriert. Gibt `true` zurück, wenn
    /// der Punkt gesetzt wurde.
    pub fn update_control_point(&mut self, index: usize, position: ControlPoint) -> bool {
        let Some(cp) = self.control_points.get_mut(index) else {
            log::debug!("Steuerpunkt {} existiert nicht, Verschieben ignoriert", index);
            return false;
        };
        *cp = position;
        self.notify(CurveEvent::ControlPointMoved { index });
        true
    }

    /// Berechnet alle Steuerpunkte per Catmull-Rom-Umrechnung neu.
    ///
    /// Die Steuerpunkt-Liste wird als Ganzes ersetzt.
    pub fn smooth_curve(&mut self) {
        if self.points.len() < 2 {
            return;
        }

        let positions: Vec<_> = self.points.iter().map(DataPoint::position).collect();
        self.control_points = spline_geometry::smooth_control_points(&positions)
            .into_iter()
            .map(|cp| self.transform.to_storage(cp))
            .collect();

        log::debug!("Kurve geglättet ({} Segmente)", self.segment_count());
        self.notify(CurveEvent::CurveSmoothed);
    }

    /// Setzt Steuerpunkt `index` auf seine lineare Standardlage zurück.
    ///
    /// Ungültige Indizes werden still ignoriert.
    pub fn reset_control_point(&mut self, index: usize) -> bool {
        if index >= self.control_points.len() {
            log::debug!("Steuerpunkt {} existiert nicht, Zurücksetzen ignoriert", index);
            return false;
        }
        let Some(default) = self.default_control_point(index) else {
            return false;
        };
        self.control_points[index] = default;
        self.notify(CurveEvent::ControlPointReset { index });
        true
    }

    /// Ersetzt alle Steuerpunkte atomar (Undo/Redo).
    ///
    /// Erlaubt sind genau 2·(n−1) Punkte oder eine leere Liste
    /// (Zustand vor der Initialisierung); alles andere wird ignoriert.
    pub fn replace_control_points(&mut self, control_points: Vec<ControlPoint>) -> bool {
        if !control_points.is_empty()
            && control_points.len() != self.expected_control_point_count()
        {
            log::warn!(
                "Steuerpunkt-Ersatz verworfen: {} statt {} Punkte",
                control_points.len(),
                self.expected_control_point_count()
            );
            return false;
        }
        self.control_points = control_points;
        self.notify(CurveEvent::ControlPointsReplaced);
        true
    }

    /// Lineare Standardlage von Steuerpunkt `index` (Speicher-Raum).
    pub fn default_control_point(&self, index: usize) -> Option<ControlPoint> {
        let segment_index = index / 2;
        let start = self.points.get(segment_index)?;
        let end = self.points.get(segment_index + 1)?;
        let domain =
            linear_control_point(start.position(), end.position(), linear_factor(index));
        Some(self.transform.to_storage(domain))
    }

    // ── Benachrichtigung ────────────────────────────────────────

    /// Zähler aller bisherigen Änderungen.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True wenn Events auf Abholung warten.
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Holt alle wartenden Events ab (in Eingangsreihenfolge).
    pub fn take_events(&mut self) -> Vec<CurveEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify(&mut self, event: CurveEvent) {
        self.revision += 1;
        self.events.push(event);
    }
}

/// Prüft endliche Koordinaten und streng steigende x-Werte.
fn validate_points(points: &[DataPoint]) -> anyhow::Result<()> {
    for (i, p) in points.iter().enumerate() {
        anyhow::ensure!(
            p.x.is_finite() && p.y.is_finite(),
            "Datenpunkt {} hat ungültige Koordinaten ({}, {})",
            i,
            p.x,
            p.y
        );
    }
    if let Some(i) = points.windows(2).position(|w| w[1].x <= w[0].x) {
        anyhow::bail!(
            "x-Werte müssen streng steigen: Punkt {} (x={}) folgt auf x={}",
            i + 1,
            points[i + 1].x,
            points[i].x
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests;
