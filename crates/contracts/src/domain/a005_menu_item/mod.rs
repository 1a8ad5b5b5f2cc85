pub mod aggregate;
pub mod filter;
pub(crate) mod seed;

pub use aggregate::{distinct_categories, MenuItem};
pub use filter::MenuItemFilter;
