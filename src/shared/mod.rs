//! Layer-neutrale Kurven-Mathematik und Laufzeit-Optionen.
//!
//! Reine Funktionen ohne Zustand: können von `core`, `app` und externen
//! Frontends direkt auf Schnappschüssen aufgerufen werden.

pub mod bezier;
mod height;
pub mod options;
pub mod spline_geometry;

pub use bezier::{
    evaluate, find_parameter_for_x, find_parameter_for_x_with, SolverSettings,
    SOLVER_MAX_ITERATIONS, SOLVER_TOLERANCE,
};
pub use height::{height_at_time, height_at_time_with};
pub use options::{CurveOptions, Padding};
