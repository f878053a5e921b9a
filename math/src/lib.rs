//! Fixed-point math for the deterministic simulation core: 16.16 scalars,
//! binary angles with table trig, 2D vectors, bounding boxes, and the
//! divline side/intersection primitives every trace is built on.

mod angle;
mod bbox;
mod divline;
mod fixed;
mod vector;

pub use angle::*;
pub use bbox::*;
pub use divline::*;
pub use fixed::*;
pub use vector::*;
