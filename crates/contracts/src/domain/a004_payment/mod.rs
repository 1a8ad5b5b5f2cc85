pub mod aggregate;
pub mod filter;
pub(crate) mod seed;
pub mod summary;

pub use aggregate::{Payment, PaymentMethod, PaymentStatus};
pub use filter::PaymentFilter;
pub use summary::PaymentSummary;
