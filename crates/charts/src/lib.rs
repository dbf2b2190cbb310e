//! Chart geometry: pie arcs, cartesian scaling and SVG output.
//!
//! Everything here is a pure function of its inputs. The same data always
//! yields the same primitives, in input order.

pub mod datasets;
pub mod datum;
pub mod pie;
pub mod series;
pub mod statistics;
pub mod svg;

pub use datum::*;
pub use pie::*;
pub use series::*;
pub use statistics::*;
