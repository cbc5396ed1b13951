use crate::core::ControlPoint;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveCommand {
    /// Steuerpunkte auf die lineare Standardlage setzen (nur wenn leer)
    InitializeControlPoints,
    /// Steuerpunkt per Drag verschieben (Speicher-Raum)
    MoveControlPoint {
        index: usize,
        position: ControlPoint,
    },
    /// Gesamte Kurve per Catmull-Rom glätten
    SmoothCurve,
    /// Einzelnen Steuerpunkt auf Standardlage zurücksetzen
    ResetControlPoint { index: usize },
    /// Letzte Änderung rückgängig machen
    Undo,
    /// Rückgängig gemachte Änderung wiederholen
    Redo,
}

impl CurveCommand {
    /// True für Commands, die einen Undo-Snapshot benötigen.
    pub fn is_undoable(&self) -> bool {
        !matches!(self, Self::Undo | Self::Redo)
    }
}
