use leptos::prelude::*;

use crate::domain::dashboard::ui::DashboardPage;
use crate::domain::forecasting::ui::ForecastingPage;
use crate::domain::inventory::ui::InventoryPage;
use crate::domain::map::ui::MapPage;
use crate::domain::notifications::ui::NotificationsPage;
use crate::domain::orders::ui::PurchaseRequestsPage;
use crate::domain::projects::ui::ProjectsPage;
use crate::domain::teams::ui::TeamsPage;
use crate::layout::Navigation;
use crate::system::auth::context::use_auth;
use crate::system::pages::auth_page::AuthPage;

/// The pages of the application. One canonical component per page; the
/// auth gate below is the only routing there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Forecasting,
    Projects,
    Inventory,
    Orders,
    Teams,
    Notifications,
    Map,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Forecasting => "Forecasting",
            Page::Projects => "Projects",
            Page::Inventory => "Inventory",
            Page::Orders => "Purchase Requests",
            Page::Teams => "Teams",
            Page::Notifications => "Notifications",
            Page::Map => "Map",
        }
    }

    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::Forecasting,
        Page::Projects,
        Page::Inventory,
        Page::Orders,
        Page::Teams,
        Page::Notifications,
        Page::Map,
    ];
}

#[component]
fn MainLayout() -> impl IntoView {
    let page = use_context::<ReadSignal<Page>>().expect("page signal not provided");

    view! {
        <div class="app-shell">
            <Navigation />
            <main class="app-main">
                {move || match page.get() {
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::Forecasting => view! { <ForecastingPage /> }.into_any(),
                    Page::Projects => view! { <ProjectsPage /> }.into_any(),
                    Page::Inventory => view! { <InventoryPage /> }.into_any(),
                    Page::Orders => view! { <PurchaseRequestsPage /> }.into_any(),
                    Page::Teams => view! { <TeamsPage /> }.into_any(),
                    Page::Notifications => view! { <NotificationsPage /> }.into_any(),
                    Page::Map => view! { <MapPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (page, set_page) = signal(Page::default());
    provide_context(page);
    provide_context(set_page);

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <AuthPage /> }
        >
            <MainLayout />
        </Show>
    }
}
