pub mod aggregate;
pub mod filter;
pub(crate) mod seed;
pub mod summary;

pub use aggregate::{Reservation, ReservationAction, ReservationStatus};
pub use filter::ReservationFilter;
pub use summary::ReservationSummary;
