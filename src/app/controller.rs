//! Controller für zentrale Command-Verarbeitung auf dem Kurvenmodell.

use super::history::{EditHistory, Snapshot};
use super::CurveCommand;
use crate::core::CurveModel;

/// Führt Editor-Commands auf einem `CurveModel` aus und pflegt die Undo-Historie.
#[derive(Debug, Default)]
pub struct CurveController {
    history: EditHistory,
}

impl CurveController {
    /// Erstellt einen neuen Controller mit Standard-Historie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller mit begrenzter Undo-Tiefe.
    pub fn with_history_depth(max_depth: usize) -> Self {
        Self {
            history: EditHistory::new_with_capacity(max_depth),
        }
    }

    /// Zugriff auf die Undo-Historie (z.B. für Menü-Zustände).
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Führt einen Command aus. Gibt `true` zurück, wenn sich das Modell geändert hat.
    ///
    /// Vor jeder wirksamen Änderung wird ein Snapshot der Steuerpunkte
    /// aufgezeichnet; wirkungslose Commands hinterlassen keinen Undo-Eintrag.
    pub fn handle_command(&mut self, model: &mut CurveModel, command: CurveCommand) -> bool {
        log::debug!("Command: {:?}", command);

        if !command.is_undoable() {
            return match command {
                CurveCommand::Undo => self.undo(model),
                _ => self.redo(model),
            };
        }

        let before = Snapshot::from_model(model);
        let revision = model.revision();

        match command {
            CurveCommand::InitializeControlPoints => model.initialize_control_points(),
            CurveCommand::MoveControlPoint { index, position } => {
                model.update_control_point(index, position);
            }
            CurveCommand::SmoothCurve => model.smooth_curve(),
            CurveCommand::ResetControlPoint { index } => {
                model.reset_control_point(index);
            }
            CurveCommand::Undo | CurveCommand::Redo => {}
        }

        let changed = model.revision() != revision;
        if changed {
            self.history.record_snapshot(before);
        }
        changed
    }

    fn undo(&mut self, model: &mut CurveModel) -> bool {
        let current = Snapshot::from_model(model);
        match self.history.pop_undo_with_current(current) {
            Some(prev) => prev.apply_to(model),
            None => {
                log::debug!("Undo: nichts rückgängig zu machen");
                false
            }
        }
    }

    fn redo(&mut self, model: &mut CurveModel) -> bool {
        let current = Snapshot::from_model(model);
        match self.history.pop_redo_with_current(current) {
            Some(next) => next.apply_to(model),
            None => {
                log::debug!("Redo: nichts zu wiederholen");
                false
            }
        }
    }
}
