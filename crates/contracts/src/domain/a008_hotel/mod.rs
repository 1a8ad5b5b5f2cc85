pub mod aggregate;
pub mod filter;
pub(crate) mod seed;
pub mod summary;

pub use aggregate::{Hotel, HotelLifecycleAction, HotelStatus, SubscriptionPlan};
pub use filter::HotelFilter;
pub use summary::PlatformSummary;
