pub mod badge;
pub mod button;
pub mod select;

pub use badge::{Badge, StatusBadge};
pub use button::Button;
pub use select::{options_with_all, Select};
