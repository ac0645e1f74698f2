pub mod error;
pub mod geometry;
pub mod quadtree;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{PointQuadtree, Quadrant, QueryStats};
