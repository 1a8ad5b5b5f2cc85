pub mod aggregate;
pub mod filter;
pub(crate) mod seed;
pub mod summary;

pub use aggregate::Client;
pub use filter::ClientFilter;
pub use summary::ClientSummary;
