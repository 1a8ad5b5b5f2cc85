pub mod aggregate;
pub(crate) mod seed;
pub mod summary;

pub use aggregate::{Sale, SalePaymentMethod, SalesPeriod};
pub use summary::SalesSummary;
