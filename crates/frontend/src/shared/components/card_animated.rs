//! Thaw [`Card`] that fades in on mount.
//!
//! Cards rendered in a row pass increasing `delay_ms` values so they appear
//! one after another:
//! ```text
//! <CardAnimated delay_ms=0>   // first
//! <CardAnimated delay_ms=80>  // second
//! <CardAnimated delay_ms=160> // third
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Gap between consecutive cards of one row
pub const STAGGER_STEP_MS: u32 = 80;

/// Inline style for the `card-appear` animation, followed by `extra`
pub fn appear_style(delay_ms: u32, extra: &str) -> String {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if extra.is_empty() {
        animation
    } else {
        format!("{} {}", animation, extra)
    }
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=appear_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}
