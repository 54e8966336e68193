use super::chart_panel::ChartPanel;
use super::tiles::{AlertTile, QuickActionTile, SummaryCard};
use crate::dashboards::d100_overview::loader::{load_overview, ConsoleSink};
use crate::dashboards::d100_overview::state::{create_state, DashboardPhase};
use crate::dashboards::d100_overview::view_model::{DashboardViewModel, QuickAction};
use crate::shared::api_utils::ApiConfig;
use crate::shared::data_source::{BrowserTransport, DataSourceClient};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::system::auth::SessionUser;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Extra class on the page root; `d100-dashboard__*` rules hang off it
pub const DASHBOARD_CLASS: &str = "d100-dashboard";

/// Header greeting, when a named user is signed in
pub fn greeting(session: Option<&SessionUser>) -> Option<String> {
    session
        .and_then(SessionUser::first_name)
        .map(|name| format!("Olá, {}", name))
}

/// Overview (home) dashboard
#[component]
pub fn OverviewDashboard(
    session: Option<SessionUser>,
    #[prop(optional)] config: ApiConfig,
    /// Quick-action click handler. Defaults to logging the action label.
    #[prop(optional)]
    on_quick_action: Option<Callback<QuickAction>>,
) -> impl IntoView {
    let phase = create_state();

    let on_quick_action = on_quick_action.unwrap_or_else(|| {
        Callback::new(|action: QuickAction| log::info!("Ação: {}", action.label))
    });

    // Effects only run in the browser, after the component is mounted
    Effect::new(move |_| {
        let started = phase.try_update(|p| p.begin_loading()).unwrap_or(false);
        if !started {
            return;
        }

        let config = config.clone();
        spawn_local(async move {
            let client = DataSourceClient::new(BrowserTransport);
            let view_model = load_overview(&client, &config, &ConsoleSink).await;
            // no-op once the page is gone
            let _ = phase.try_update(|p| p.finish(view_model));
        });
    });

    let greeting_text = greeting(session.as_ref());

    view! {
        <PageFrame page_id="d100_overview--dashboard" category=PAGE_CAT_DASHBOARD class=DASHBOARD_CLASS>
            {move || match phase.get() {
                DashboardPhase::Mounting => view! { <></> }.into_any(),
                DashboardPhase::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                        <Spinner />
                        <span>"Carregando dashboard..."</span>
                    </Flex>
                }.into_any(),
                DashboardPhase::Loaded(view_model) => view! {
                    <div class="page__header">
                        <h2 class="page__title">"Visão Geral"</h2>
                        {greeting_text.clone().map(|text| view! { <span class="page__subtitle">{text}</span> })}
                    </div>
                    <OverviewContent view_model={*view_model} on_quick_action=on_quick_action />
                }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn OverviewContent(
    view_model: DashboardViewModel,
    on_quick_action: Callback<QuickAction>,
) -> impl IntoView {
    let DashboardViewModel {
        cards,
        alerts,
        quick_actions,
        charts,
    } = view_model;

    let cards = cards
        .into_iter()
        .zip(0u32..)
        .map(|(card, index)| view! { <SummaryCard card=card index=index /> })
        .collect_view();

    let alerts = (!alerts.is_empty()).then(|| {
        let tiles = alerts
            .into_iter()
            .map(|alert| view! { <AlertTile alert=alert /> })
            .collect_view();
        view! { <div class="d100-dashboard__alerts">{tiles}</div> }
    });

    let quick_actions = quick_actions
        .into_iter()
        .map(|action| view! { <QuickActionTile action=action on_click=on_quick_action /> })
        .collect_view();

    view! {
        <div class="page__content">
            <div
                class="d100-dashboard__cards"
                style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: var(--spacing-md);"
            >
                {cards}
            </div>

            {alerts}

            <div class="d100-dashboard__quick-actions" style="display: flex; flex-wrap: wrap; gap: var(--spacing-sm);">
                {quick_actions}
            </div>

            <div
                class="d100-dashboard__charts"
                style="display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: var(--spacing-md);"
            >
                <ChartPanel series=charts.payment_methods />
                <ChartPanel series=charts.products />
                <div style="grid-column: 1 / -1;">
                    <ChartPanel series=charts.daily_sales wide=true />
                </div>
            </div>
        </div>
    }
}
