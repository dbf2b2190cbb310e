pub mod picking;
pub mod projection;
pub mod selection;

pub use picking::*;
pub use projection::*;
pub use selection::*;
