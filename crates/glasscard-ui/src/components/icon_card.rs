//! Icon Card
//!
//! Icon, title and optional subtitle on a compact glass shell. Stateless:
//! activation only forwards to `on_activate`.

use dioxus::prelude::*;
use glasscard_core::{
    Activation, IconCardContent, InputEvent, ShellOptions, ShellVariant, SizeClass, ThemeMode,
    VisualTier,
};

use super::glass_card::{forward_activation, identity_or_log};
use super::surface::CardSurface;

#[component]
pub fn IconCard(
    icon: String,
    title: String,
    #[props(default)] subtitle: Option<String>,
    /// Defaults to the title
    #[props(default)]
    accessible_label: Option<String>,
    #[props(default)] tier: VisualTier,
    #[props(default)] theme: ThemeMode,
    #[props(default)] on_activate: Option<EventHandler<Activation>>,
) -> Element {
    let content = match IconCardContent::new(icon, title, subtitle) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(error = %err, "card not rendered");
            return VNode::empty();
        }
    };
    let label = accessible_label.unwrap_or_else(|| content.title.clone());
    let Some(identity) = identity_or_log("IconCard", label, None) else {
        return VNode::empty();
    };
    let options = ShellOptions {
        tier,
        variant: ShellVariant::Compact.into(),
        size: SizeClass::Small,
        interactive: on_activate.is_some(),
        theme,
    };

    rsx! {
        CardSurface {
            options,
            identity,
            kind: "icon-card",
            on_input: move |event: InputEvent| forward_activation(&event, on_activate),
            span { class: "icon-card__icon", "aria-hidden": "true", "{content.icon}" }
            div { class: "icon-card__text",
                span { class: "icon-card__title", "{content.title}" }
                if let Some(subtitle) = content.subtitle.clone() {
                    span { class: "icon-card__subtitle", "{subtitle}" }
                }
            }
        }
    }
}
