//! Geometry factory: triangle soups, derived solid data and planet visuals.

mod planet;
mod polyhedra;
mod solid;

pub use planet::{
    BodyVisual, STAR_COUNT, STAR_FIELD_RADIUS, STAR_FIELD_SEED, grid_lines, star_field,
};
pub use polyhedra::{SolidKind, raw_triangles};
pub use solid::{
    EXPLODE_DISTANCE, EXPLODE_TWIST, FEATURE_EDGE_THRESHOLD_DEG, FaceData, SolidGeometry,
    VERTEX_PRECISION,
};
