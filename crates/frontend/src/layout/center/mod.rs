pub mod center;

pub use center::Center;
