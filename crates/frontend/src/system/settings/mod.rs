pub mod storage;
pub mod ui;
