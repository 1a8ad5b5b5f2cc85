use super::aggregate::MenuItem;
use crate::domain::common::Currency;

fn menu_item(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    description: &str,
    available: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        currency: Currency::Htg,
        description: description.to_string(),
        available,
    }
}

pub(crate) fn menu_items() -> Vec<MenuItem> {
    vec![
        menu_item(
            "menu-001",
            "Grilled Chicken Plate",
            "Main Course",
            450.0,
            "Grilled chicken with rice, beans, and salad",
            true,
        ),
        menu_item(
            "menu-002",
            "Fresh Fish",
            "Main Course",
            550.0,
            "Fresh catch of the day with vegetables",
            true,
        ),
        menu_item(
            "menu-003",
            "Caesar Salad",
            "Appetizers",
            320.0,
            "Fresh romaine lettuce with caesar dressing",
            true,
        ),
        menu_item(
            "menu-004",
            "Fresh Orange Juice",
            "Beverages",
            120.0,
            "Freshly squeezed orange juice",
            true,
        ),
        menu_item(
            "menu-005",
            "Chocolate Cake",
            "Desserts",
            280.0,
            "Rich chocolate cake with ganache",
            false,
        ),
        menu_item(
            "menu-006",
            "Griot with Plantains",
            "Main Course",
            480.0,
            "Traditional Haitian fried pork with plantains",
            true,
        ),
    ]
}
