pub mod a001_room;
pub mod a002_reservation;
pub mod a003_client;
pub mod a004_payment;
pub mod a005_menu_item;
pub mod a006_inventory_item;
pub mod a007_sale;
pub mod a008_hotel;
pub mod common;
