//! Dashboard view state, its reducer and the session that drives it.

pub mod event_bus;
pub mod session;
pub mod state;
pub mod view;

pub use event_bus::*;
pub use session::*;
pub use state::*;
pub use view::*;
