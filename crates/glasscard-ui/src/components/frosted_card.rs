//! Frosted Card
//!
//! Frosted shell: content or navigation variant with a size class.

use dioxus::prelude::*;
use glasscard_core::{
    Activation, FrostedVariant, InputEvent, ShellOptions, SizeClass, ThemeMode, VisualTier,
};

use super::glass_card::{forward_activation, identity_or_log};
use super::surface::CardSurface;

#[component]
pub fn FrostedCard(
    accessible_label: String,
    #[props(default)] described_by_id: Option<String>,
    #[props(default)] variant: FrostedVariant,
    #[props(default)] tier: VisualTier,
    #[props(default)] size: SizeClass,
    #[props(default = true)] interactive: bool,
    #[props(default)] theme: ThemeMode,
    #[props(default)] on_activate: Option<EventHandler<Activation>>,
    children: Element,
) -> Element {
    let Some(identity) = identity_or_log("FrostedCard", accessible_label, described_by_id) else {
        return VNode::empty();
    };
    let options = ShellOptions {
        tier,
        variant: variant.into(),
        size,
        interactive,
        theme,
    };
    let kind = match variant {
        FrostedVariant::Content => "frosted-card",
        FrostedVariant::Navigation => "frosted-card frosted-card--nav",
    };

    rsx! {
        CardSurface {
            options,
            identity,
            kind,
            on_input: move |event: InputEvent| forward_activation(&event, on_activate),
            {children}
        }
    }
}
