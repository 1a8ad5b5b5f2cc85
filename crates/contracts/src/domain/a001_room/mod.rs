pub mod aggregate;
pub mod filter;
pub(crate) mod seed;

pub use aggregate::{Room, RoomStatus};
pub use filter::RoomFilter;
