pub mod edit_panel;
pub mod empty_state;
pub mod kpi_card;
pub mod notice;
pub mod page_header;
pub mod ui;
