//! Core-Domänentypen: Datenpunkte, Steuerpunkte, Kurvenmodell, Transformation.

pub mod curve_model;
pub mod events;
pub mod point;
pub mod profile;
pub mod transform;

pub use curve_model::CurveModel;
pub use events::CurveEvent;
pub use point::{ControlPoint, DataPoint, Segment};
pub use transform::{ChartTransform, CoordinateTransform, IdentityTransform};
