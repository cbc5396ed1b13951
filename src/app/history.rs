use crate::core::{ControlPoint, CurveModel};

/// Standard-Tiefe der Undo/Redo-Stacks.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Datenpunkte sind unveränderlich, daher genügen die Steuerpunkte.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub control_points: Vec<ControlPoint>,
}

impl Snapshot {
    /// Erstellt einen Snapshot der aktuellen Steuerpunkte.
    pub fn from_model(model: &CurveModel) -> Self {
        Self {
            control_points: model.control_points().to_vec(),
        }
    }

    /// Stellt den Snapshot wieder her (atomarer Ersatz der Steuerpunkte).
    pub fn apply_to(self, model: &mut CurveModel) -> bool {
        model.replace_control_points(self.control_points)
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(DEFAULT_HISTORY_DEPTH)
    }
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen Snapshot auf den Undo-Stack und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Nimmt den obersten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Nimmt den obersten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
