//! Small primitives shared by every crate: ids, vectors and float policy.

pub mod ids;
pub mod math;

pub use ids::*;
