//! Trip Card
//!
//! Destination, dates and an optional travelers/price line on a frosted
//! content shell.

use dioxus::prelude::*;
use glasscard_core::{
    Activation, FrostedVariant, InputEvent, ShellOptions, SizeClass, ThemeMode, TripCardContent,
    VisualTier,
};

use super::glass_card::{forward_activation, identity_or_log};
use super::surface::CardSurface;

#[component]
pub fn TripCard(
    destination: String,
    dates: String,
    #[props(default)] travelers: Option<String>,
    #[props(default)] price: Option<String>,
    /// Defaults to "Trip to {destination}"
    #[props(default)]
    accessible_label: Option<String>,
    #[props(default)] tier: VisualTier,
    #[props(default)] size: SizeClass,
    #[props(default)] theme: ThemeMode,
    #[props(default)] on_activate: Option<EventHandler<Activation>>,
) -> Element {
    let content = match TripCardContent::new(destination, dates, travelers, price) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(error = %err, "card not rendered");
            return VNode::empty();
        }
    };
    let label = accessible_label.unwrap_or_else(|| format!("Trip to {}", content.destination));
    let Some(identity) = identity_or_log("TripCard", label, None) else {
        return VNode::empty();
    };
    let options = ShellOptions {
        tier,
        variant: FrostedVariant::Content.into(),
        size,
        interactive: on_activate.is_some(),
        theme,
    };
    let lines = content.lines();

    rsx! {
        CardSurface {
            options,
            identity,
            kind: "trip-card",
            on_input: move |event: InputEvent| forward_activation(&event, on_activate),
            h3 { class: "trip-card__destination", "{content.destination}" }
            for line in lines.into_iter().skip(1) {
                p { class: "trip-card__line", "{line}" }
            }
        }
    }
}
