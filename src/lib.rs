//! Bézier Curve Simulator Library.
//! Kurven-Mathematik (Modell, Steuerpunkt-Generator, Evaluator, Solver, Abfrage)
//! als Library exportiert für Tests, Benchmarks und Editor-Frontends.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{CurveCommand, CurveController, EditHistory};
pub use crate::core::{
    ChartTransform, ControlPoint, CoordinateTransform, CurveEvent, CurveModel, DataPoint,
    IdentityTransform, Segment,
};
pub use shared::{
    evaluate, find_parameter_for_x, height_at_time, CurveOptions, SolverSettings,
    SOLVER_MAX_ITERATIONS, SOLVER_TOLERANCE,
};
