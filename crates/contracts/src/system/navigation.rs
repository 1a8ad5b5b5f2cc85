//! Route table and sidebar menu.

use crate::system::session::UserRole;

/// Every page reachable in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Rooms,
    Reservations,
    Clients,
    Payments,
    RestaurantMenu,
    RestaurantInventory,
    RestaurantSales,
    Reports,
    Settings,
    SuperAdmin,
    Login,
    NotFound,
}

impl AppRoute {
    pub fn all() -> [AppRoute; 13] {
        [
            AppRoute::Dashboard,
            AppRoute::Rooms,
            AppRoute::Reservations,
            AppRoute::Clients,
            AppRoute::Payments,
            AppRoute::RestaurantMenu,
            AppRoute::RestaurantInventory,
            AppRoute::RestaurantSales,
            AppRoute::Reports,
            AppRoute::Settings,
            AppRoute::SuperAdmin,
            AppRoute::Login,
            AppRoute::NotFound,
        ]
    }

    /// Fixed path of the page; the catch-all has none.
    pub fn path(&self) -> Option<&'static str> {
        let path = match self {
            AppRoute::Dashboard => "/",
            AppRoute::Rooms => "/rooms",
            AppRoute::Reservations => "/reservations",
            AppRoute::Clients => "/clients",
            AppRoute::Payments => "/payments",
            AppRoute::RestaurantMenu => "/restaurant/menu",
            AppRoute::RestaurantInventory => "/restaurant/inventory",
            AppRoute::RestaurantSales => "/restaurant/sales",
            AppRoute::Reports => "/reports",
            AppRoute::Settings => "/settings",
            AppRoute::SuperAdmin => "/super-admin",
            AppRoute::Login => "/login",
            AppRoute::NotFound => return None,
        };
        Some(path)
    }

    /// Exact path match; anything else is `NotFound`.
    pub fn from_path(path: &str) -> AppRoute {
        AppRoute::all()
            .into_iter()
            .find(|route| route.path() == Some(path))
            .unwrap_or(AppRoute::NotFound)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Rooms => "Rooms",
            AppRoute::Reservations => "Reservations",
            AppRoute::Clients => "Clients",
            AppRoute::Payments => "Payments",
            AppRoute::RestaurantMenu => "Menu",
            AppRoute::RestaurantInventory => "Inventory",
            AppRoute::RestaurantSales => "Sales",
            AppRoute::Reports => "Reports",
            AppRoute::Settings => "Settings",
            AppRoute::SuperAdmin => "Super Admin",
            AppRoute::Login => "Login",
            AppRoute::NotFound => "Page Not Found",
        }
    }

    /// Icon name for the sidebar entry.
    pub fn icon(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "layout-dashboard",
            AppRoute::Rooms => "bed",
            AppRoute::Reservations => "calendar",
            AppRoute::Clients => "users",
            AppRoute::Payments => "credit-card",
            AppRoute::RestaurantMenu => "utensils",
            AppRoute::RestaurantInventory => "package",
            AppRoute::RestaurantSales => "shopping-cart",
            AppRoute::Reports => "bar-chart",
            AppRoute::Settings => "settings",
            AppRoute::SuperAdmin => "building",
            AppRoute::Login | AppRoute::NotFound => "circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub items: Vec<AppRoute>,
}

/// Sidebar sections visible to `role`.
///
/// This only shapes the menu. Every route stays reachable by URL whatever the
/// role; access control belongs to request authorization, which this
/// application does not have.
pub fn menu_sections(role: UserRole) -> Vec<MenuSection> {
    let mut sections = vec![MenuSection {
        title: "Hotel Management",
        items: vec![
            AppRoute::Dashboard,
            AppRoute::Reservations,
            AppRoute::Rooms,
            AppRoute::Clients,
            AppRoute::Payments,
        ],
    }];
    if role.shows_restaurant_section() {
        sections.push(MenuSection {
            title: "Restaurant",
            items: vec![
                AppRoute::RestaurantMenu,
                AppRoute::RestaurantInventory,
                AppRoute::RestaurantSales,
            ],
        });
    }
    sections.push(MenuSection {
        title: "General",
        items: vec![AppRoute::Reports, AppRoute::Settings],
    });
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_maps_back_to_its_route() {
        for route in AppRoute::all() {
            if let Some(path) = route.path() {
                assert_eq!(AppRoute::from_path(path), route);
            }
        }
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/rooms/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/restaurant/reports"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
    }

    #[test]
    fn test_restaurant_section_by_role() {
        let titles = |role| {
            menu_sections(role)
                .into_iter()
                .map(|s| s.title)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            titles(UserRole::Owner),
            vec!["Hotel Management", "Restaurant", "General"]
        );
        assert_eq!(
            titles(UserRole::RestaurantStaff),
            vec!["Hotel Management", "Restaurant", "General"]
        );
        assert_eq!(titles(UserRole::Receptionist), vec!["Hotel Management", "General"]);
        assert_eq!(titles(UserRole::SuperAdmin), vec!["Hotel Management", "General"]);
    }

    #[test]
    fn test_hidden_routes_still_resolve() {
        let visible: Vec<AppRoute> = menu_sections(UserRole::Receptionist)
            .into_iter()
            .flat_map(|s| s.items)
            .collect();
        assert!(!visible.contains(&AppRoute::RestaurantMenu));
        assert_eq!(
            AppRoute::from_path("/restaurant/menu"),
            AppRoute::RestaurantMenu
        );
    }
}
