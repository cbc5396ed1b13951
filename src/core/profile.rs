//! Eingebautes Flugprofil und JSON-Ein-/Ausgabe von Datenpunkten.

use super::DataPoint;
use anyhow::Context;
use std::path::Path;

/// Standard-Datensatz: Höhenprofil eines Raketenstarts (Zeit in s, Höhe in mm).
pub fn launch_profile() -> Vec<DataPoint> {
    vec![
        DataPoint::labeled(-300.0, 0.0, "ENGINE CHILL"),
        DataPoint::labeled(0.0, 0.0, "LIFTOFF"),
        DataPoint::labeled(72.0, 1250.0 * 1000.0, "MAX-Q"),
        DataPoint::labeled(145.0, 7500.0 * 1000.0, "STAGE SEP"),
        DataPoint::labeled(195.0, 9500.0 * 1000.0, "FAIRING"),
        DataPoint::labeled(380.0, 22000.0 * 1000.0, "ENTRY BURN"),
        DataPoint::labeled(490.0, 26000.0 * 1000.0, "LANDING BURN"),
        DataPoint::labeled(530.0, 27600.0 * 1000.0, "SECO-1"),
    ]
}

/// Liest Datenpunkte aus einer JSON-Datei (Array von `{ x, y, label? }`).
pub fn load_points(path: &Path) -> anyhow::Result<Vec<DataPoint>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datenpunkte nicht lesbar: {}", path.display()))?;
    let points = parse_points(&content)
        .with_context(|| format!("Datenpunkte fehlerhaft: {}", path.display()))?;
    log::info!("{} Datenpunkte geladen aus: {}", points.len(), path.display());
    Ok(points)
}

/// Parst Datenpunkte aus einem JSON-String.
pub fn parse_points(json: &str) -> anyhow::Result<Vec<DataPoint>> {
    Ok(serde_json::from_str(json)?)
}

/// Schreibt Datenpunkte als JSON-Datei.
pub fn save_points(path: &Path, points: &[DataPoint]) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(points)?;
    std::fs::write(path, content)
        .with_context(|| format!("Datenpunkte nicht schreibbar: {}", path.display()))?;
    log::info!("{} Datenpunkte gespeichert nach: {}", points.len(), path.display());
    Ok(())
}
