pub mod pages;
pub mod session;
pub mod settings;
