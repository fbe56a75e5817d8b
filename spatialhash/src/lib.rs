pub mod collision;
pub mod error;
pub mod spatial_hash;

pub use common::shapes;

pub use collision::{overlaps, rectangle_rectangle};
pub use error::{SpatialHashError, SpatialHashResult};
pub use spatial_hash::{CellRange, Config, SpatialHash};
