use crate::dashboards::OverviewDashboard;
use crate::shared::api_utils::ApiConfig;
use crate::system::auth::storage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let session = storage::load_session_user();
    let config = ApiConfig::from_environment();
    log::debug!("API base: {:?}", config.base_url);

    view! {
        <OverviewDashboard session=session config=config />
    }
}
