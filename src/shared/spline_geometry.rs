//! Reine Geometrie-Funktionen für die Steuerpunkt-Erzeugung.
//!
//! Layer-neutral: arbeitet ausschließlich im Domänen-Raum. Die Abbildung in den
//! Speicher-Raum übernimmt der Aufrufer (`CurveModel`).

use glam::DVec2;

/// Lage des ersten Steuerpunkts eines Segments auf der Sehne.
pub const FIRST_CONTROL_FACTOR: f64 = 0.25;
/// Lage des zweiten Steuerpunkts eines Segments auf der Sehne.
pub const SECOND_CONTROL_FACTOR: f64 = 0.75;

/// Sehnen-Faktor für Steuerpunkt-Index `index` (gerade = erster, ungerade = zweiter).
pub fn linear_factor(index: usize) -> f64 {
    if index % 2 == 0 {
        FIRST_CONTROL_FACTOR
    } else {
        SECOND_CONTROL_FACTOR
    }
}

/// Punkt auf der Geraden `start → end` beim Anteil `factor`.
pub fn linear_control_point(start: DVec2, end: DVec2, factor: f64) -> DVec2 {
    start + (end - start) * factor
}

/// Standard-Steuerpunktpaar eines Segments (bei 1/4 und 3/4 der Sehne).
pub fn linear_control_pair(start: DVec2, end: DVec2) -> (DVec2, DVec2) {
    (
        linear_control_point(start, end, FIRST_CONTROL_FACTOR),
        linear_control_point(start, end, SECOND_CONTROL_FACTOR),
    )
}

/// Catmull-Rom → Bézier: Steuerpunkte des Segments `p1 → p2`.
///
/// `p0` und `p3` sind die Nachbarn; am Rand übergibt der Aufrufer den
/// Endpunkt selbst (flache Tangente).
///
/// `cp1 = p1 + (p2 − p0) / 6`, `cp2 = p2 − (p3 − p1) / 6`
pub fn catmull_rom_to_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> (DVec2, DVec2) {
    let cp1 = p1 + (p2 - p0) / 6.0;
    let cp2 = p2 - (p3 - p1) / 6.0;
    (cp1, cp2)
}

/// Geglättete Steuerpunkte für die gesamte Punktfolge (2·(n−1) Stück).
///
/// Rand-Segmente verwenden den jeweiligen Endpunkt als Nachbarn.
/// Weniger als zwei Punkte ergeben eine leere Liste.
pub fn smooth_control_points(points: &[DVec2]) -> Vec<DVec2> {
    if points.len() < 2 {
        return Vec::new();
    }
    let last = points.len() - 1;
    let mut result = Vec::with_capacity(2 * last);
    for seg in 0..last {
        let p0 = points[seg.saturating_sub(1)];
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = points[(seg + 2).min(last)];
        let (cp1, cp2) = catmull_rom_to_bezier(p0, p1, p2, p3);
        result.push(cp1);
        result.push(cp2);
    }
    result
}
