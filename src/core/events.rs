//! Änderungs-Benachrichtigungen des Kurvenmodells.

/// Wird vom `CurveModel` nach jeder tatsächlichen Änderung eingereiht.
///
/// Das Frontend holt die Events per `CurveModel::take_events()` ab und
/// zeichnet neu; der Mechanismus dahinter (Polling, Kanal, Signal) ist Sache
/// des Frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveEvent {
    /// Steuerpunkte wurden erstmalig auf die lineare Standardlage gesetzt
    ControlPointsInitialized,
    /// Ein einzelner Steuerpunkt wurde verschoben (Drag)
    ControlPointMoved { index: usize },
    /// Alle Steuerpunkte wurden durch die Glättung ersetzt
    CurveSmoothed,
    /// Ein einzelner Steuerpunkt wurde auf die Standardlage zurückgesetzt
    ControlPointReset { index: usize },
    /// Alle Steuerpunkte wurden aus einem Schnappschuss ersetzt (Undo/Redo)
    ControlPointsReplaced,
}
