//! Natural-resource record store and the filter/sort engine over it.

pub mod query;
pub mod record;
pub mod store;

pub use query::*;
pub use record::*;
pub use store::*;
