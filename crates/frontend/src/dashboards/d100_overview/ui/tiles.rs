use crate::dashboards::d100_overview::view_model::{Alert, Card, QuickAction};
use crate::shared::components::card_animated::{CardAnimated, STAGGER_STEP_MS};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SummaryCard(
    card: Card,
    /// Position in the card row, drives the appear delay
    #[prop(optional)]
    index: u32,
) -> impl IntoView {
    view! {
        <CardAnimated delay_ms={index * STAGGER_STEP_MS} style="min-height: 110px;">
            <div class="d100-card">
                <div class="d100-card__icon">{icon(card.icon)}</div>
                <div class="d100-card__content">
                    <div class="d100-card__title">{card.title}</div>
                    <div class="d100-card__value">{card.value}</div>
                </div>
            </div>
        </CardAnimated>
    }
}

#[component]
pub fn AlertTile(alert: Alert) -> impl IntoView {
    view! {
        <div class="d100-alert" role="alert">
            <span class="d100-alert__icon">{icon("alert-circle")}</span>
            <span class="d100-alert__message">{alert.message}</span>
        </div>
    }
}

#[component]
pub fn QuickActionTile(action: QuickAction, on_click: Callback<QuickAction>) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Subtle
            on_click=move |_| on_click.run(action)
        >
            <div class="d100-quick-action">
                <span class="d100-quick-action__icon">{icon(action.icon)}</span>
                <span class="d100-quick-action__label">{action.label}</span>
            </div>
        </Button>
    }
}
