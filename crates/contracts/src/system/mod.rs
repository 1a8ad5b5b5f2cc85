pub mod actions;
pub mod navigation;
pub mod session;
pub mod settings;
pub mod team;
