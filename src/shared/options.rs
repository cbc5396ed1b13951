//! Zentrale Konfiguration für den Bézier Curve Simulator.
//!
//! `CurveOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::bezier::{SolverSettings, SOLVER_MAX_ITERATIONS, SOLVER_TOLERANCE};
use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Breite der SVG-Zeichenfläche in Pixeln.
pub const SVG_WIDTH: f64 = 1000.0;
/// Höhe der SVG-Zeichenfläche in Pixeln.
pub const SVG_HEIGHT: f64 = 600.0;

// ── Achsen ──────────────────────────────────────────────────────────

/// Die Zeitachse beginnt spätestens hier (Sekunden).
pub const AXIS_X_MIN_FLOOR: f64 = -350.0;
/// Die Zeitachse endet frühestens hier (Sekunden).
pub const AXIS_X_MAX_FLOOR: f64 = 500.0;
/// Untergrenze der Höhenachse.
pub const AXIS_Y_MIN: f64 = 0.0;
/// Die Höhenachse reicht mindestens bis hier.
pub const AXIS_Y_MAX_FLOOR: f64 = 27_000_000.0;

/// Ränder um den Zeichenbereich (Platz für Achsen-Beschriftung).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    /// X-Achsen-Rand
    pub bottom: f64,
    /// Y-Achsen-Rand
    pub left: f64,
    pub right: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 40.0,
            bottom: 60.0,
            left: 80.0,
            right: 40.0,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `bezier_curve_simulator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurveOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Breite der Zeichenfläche
    pub svg_width: f64,
    /// Höhe der Zeichenfläche
    pub svg_height: f64,

    // ── Achsen ──────────────────────────────────────────────────
    pub axis_x_min_floor: f64,
    pub axis_x_max_floor: f64,
    pub axis_y_min: f64,
    pub axis_y_max_floor: f64,

    // ── Solver ──────────────────────────────────────────────────
    /// Absolute Toleranz der Parameter-Suche in Domänen-x-Einheiten
    pub solver_tolerance: f64,
    /// Maximale Anzahl Bisektions-Schritte
    pub solver_max_iterations: usize,

    // ── Ränder ──────────────────────────────────────────────────
    /// Ränder um den Zeichenbereich
    pub padding: Padding,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            svg_width: SVG_WIDTH,
            svg_height: SVG_HEIGHT,

            axis_x_min_floor: AXIS_X_MIN_FLOOR,
            axis_x_max_floor: AXIS_X_MAX_FLOOR,
            axis_y_min: AXIS_Y_MIN,
            axis_y_max_floor: AXIS_Y_MAX_FLOOR,

            solver_tolerance: SOLVER_TOLERANCE,
            solver_max_iterations: SOLVER_MAX_ITERATIONS,

            padding: Padding::default(),
        }
    }
}

impl CurveOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_simulator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_simulator.toml")
    }

    /// Solver-Parameter für `find_parameter_for_x_with` / `height_at_time_with`.
    pub fn solver(&self) -> SolverSettings {
        SolverSettings {
            tolerance: self.solver_tolerance,
            max_iterations: self.solver_max_iterations,
        }
    }
}
