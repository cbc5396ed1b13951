//! Editor-Anbindung: Commands, Controller und Undo/Redo-Historie.
//!
//! Ein Frontend übersetzt Benutzeraktionen (Drag, Menü, Tastatur) in
//! `CurveCommand`s und übergibt sie dem `CurveController`.

mod command;
pub mod controller;
pub mod history;

pub use command::CurveCommand;
pub use controller::CurveController;
pub use history::{EditHistory, Snapshot};
