pub mod aggregate;
pub mod filter;
pub(crate) mod seed;

pub use aggregate::{
    is_low_stock, low_stock_count, low_stock_message, stock_bar_percentage, InventoryItem,
    INVENTORY_CATEGORIES,
};
pub use filter::InventoryFilter;
