pub mod aggregate;
pub mod filter;
pub mod format;
pub mod indicators;
