//! Kubische Bézier-Auswertung und Parameter-Suche t(x).

use glam::DVec2;

/// Absolute Toleranz der Parameter-Suche (Domänen-x-Einheiten).
pub const SOLVER_TOLERANCE: f64 = 0.01;
/// Maximale Anzahl Bisektions-Schritte.
pub const SOLVER_MAX_ITERATIONS: usize = 20;

/// Abbruchkriterien der Bisektion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: SOLVER_TOLERANCE,
            max_iterations: SOLVER_MAX_ITERATIONS,
        }
    }
}

/// Polynom-Koeffizienten einer Achse: value(t) = a·t³ + b·t² + c·t + d
#[derive(Debug, Clone, Copy)]
struct AxisPolynomial {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl AxisPolynomial {
    fn new(p0: f64, p1: f64, p2: f64, p3: f64) -> Self {
        let c = 3.0 * (p1 - p0);
        let b = 3.0 * (p2 - p1) - c;
        let a = p3 - p0 - c - b;
        Self { a, b, c, d: p0 }
    }

    fn value(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t + self.d
    }
}

/// B(t) in Polynomform, je Achse unabhängig berechnet (t ∈ [0, 1]).
///
/// `c = 3·(P1−P0)`, `b = 3·(P2−P1) − c`, `a = P3 − P0 − c − b`
pub fn evaluate(t: f64, p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> DVec2 {
    let x = AxisPolynomial::new(p0.x, p1.x, p2.x, p3.x);
    let y = AxisPolynomial::new(p0.y, p1.y, p2.y, p3.y);
    DVec2::new(x.value(t), y.value(t))
}

/// Sucht per Bisektion das `t`, für das x(t) ≈ `target_x` gilt.
pub fn find_parameter_for_x(target_x: f64, p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> f64 {
    find_parameter_for_x_with(target_x, p0, p1, p2, p3, SolverSettings::default())
}

/// Wie [`find_parameter_for_x`], mit expliziten Abbruchkriterien.
///
/// Setzt voraus, dass x(t) im Segment monoton steigt. Konvergiert die Suche
/// nicht innerhalb des Iterations-Budgets, wird das zuletzt berechnete `t`
/// zurückgegeben (Näherung, kein Fehler).
pub fn find_parameter_for_x_with(
    target_x: f64,
    p0: DVec2,
    p1: DVec2,
    p2: DVec2,
    p3: DVec2,
    settings: SolverSettings,
) -> f64 {
    // Nur die x-Achse wird für die Suche benötigt
    let x_of = AxisPolynomial::new(p0.x, p1.x, p2.x, p3.x);

    let mut t_low = 0.0;
    let mut t_high = 1.0;
    let mut t = 0.5;

    for _ in 0..settings.max_iterations {
        let x_at_t = x_of.value(t);
        if (x_at_t - target_x).abs() < settings.tolerance {
            return t;
        }
        if x_at_t < target_x {
            t_low = t;
        } else {
            t_high = t;
        }
        t = (t_low + t_high) / 2.0;
    }

    log::debug!(
        "Parameter-Suche für x={} nach {} Iterationen nicht konvergiert (t={})",
        target_x,
        settings.max_iterations,
        t
    );
    t
}
