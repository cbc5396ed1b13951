//! Höhenabfrage: Eingabe-Koordinate → Ausgabe-Koordinate der zusammengesetzten Kurve.

use super::bezier::{evaluate, find_parameter_for_x_with, SolverSettings};
use super::spline_geometry::linear_control_pair;
use crate::core::{ControlPoint, DataPoint};

/// Berechnet die Höhe der Kurve zum Zeitpunkt `time`.
///
/// `points` und `control_points` müssen im selben Koordinatenraum liegen.
/// Außerhalb des Datenbereichs wird auf den jeweiligen Endpunkt geklemmt.
pub fn height_at_time(time: f64, points: &[DataPoint], control_points: &[ControlPoint]) -> f64 {
    height_at_time_with(time, points, control_points, SolverSettings::default())
}

/// Wie [`height_at_time`], mit expliziten Solver-Parametern.
pub fn height_at_time_with(
    time: f64,
    points: &[DataPoint],
    control_points: &[ControlPoint],
    settings: SolverSettings,
) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };

    // 1. Segment suchen, in dem die Zeit liegt (erster Treffer gewinnt)
    let Some(segment_index) = points
        .windows(2)
        .position(|w| time >= w[0].x && time <= w[1].x)
    else {
        // Außerhalb des Bereichs: Endpunkt-Höhe
        return if time < first.x { first.y } else { last.y };
    };

    // 2. Die vier definierenden Punkte des Segments
    let p0 = points[segment_index].position();
    let p3 = points[segment_index + 1].position();
    let (p1, p2) = match (
        control_points.get(segment_index * 2),
        control_points.get(segment_index * 2 + 1),
    ) {
        (Some(cp1), Some(cp2)) => (*cp1, *cp2),
        _ => {
            log::debug!(
                "Steuerpunkte für Segment {} fehlen, verwende lineare Standardlage",
                segment_index
            );
            linear_control_pair(p0, p3)
        }
    };

    // 3. Parameter t zur Zeit suchen, 4. Höhe bei t auswerten
    let t = find_parameter_for_x_with(time, p0, p1, p2, p3, settings);
    evaluate(t, p0, p1, p2, p3).y
}
