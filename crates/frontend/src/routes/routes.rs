use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d401_reports::ui::ReportsDashboard;
use crate::domain::a001_room::ui::list::RoomList;
use crate::domain::a002_reservation::ui::list::ReservationList;
use crate::domain::a003_client::ui::list::ClientList;
use crate::domain::a004_payment::ui::list::PaymentList;
use crate::domain::a005_menu_item::ui::list::MenuItemList;
use crate::domain::a006_inventory_item::ui::list::InventoryList;
use crate::domain::a007_sale::ui::list::SaleList;
use crate::domain::a008_hotel::ui::list::HotelList;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::settings::ui::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// One page per fixed path; anything else renders the not-found view.
///
/// Routes are not filtered by role. The sidebar hides sections for some roles
/// but every page here stays reachable by URL.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! {
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/rooms") view=RoomList />
                    <Route path=path!("/reservations") view=ReservationList />
                    <Route path=path!("/clients") view=ClientList />
                    <Route path=path!("/payments") view=PaymentList />
                    <Route path=path!("/restaurant/menu") view=MenuItemList />
                    <Route path=path!("/restaurant/inventory") view=InventoryList />
                    <Route path=path!("/restaurant/sales") view=SaleList />
                    <Route path=path!("/reports") view=ReportsDashboard />
                    <Route path=path!("/settings") view=SettingsPage />
                    <Route path=path!("/super-admin") view=HotelList />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            }.into_any()
        />
    }
}
