//! Projection module - remaining-balance curves derived from a series.

mod projection_model;


pub use projection_model::{project, project_all, CurveKind, ProjectedCurves, ProjectionPoint};
