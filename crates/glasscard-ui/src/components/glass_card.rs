//! Glass Card
//!
//! Base glass shell around arbitrary children.

use dioxus::prelude::*;
use glasscard_core::{
    Activation, ActionHandler, CardIdentity, InputEvent, ShellOptions, ShellVariant, SizeClass,
    ThemeMode, VisualTier,
};

use super::surface::CardSurface;

/// Dispatch one input to an optional activation callback
pub(crate) fn forward_activation(event: &InputEvent, on_activate: Option<EventHandler<Activation>>) {
    let mut handler = match on_activate {
        Some(callback) => ActionHandler::new(move |activation| callback.call(activation)),
        None => ActionHandler::default(),
    };
    glasscard_core::dispatch(event, &mut handler);
}

/// Build an identity or log why the card is skipped
pub(crate) fn identity_or_log(
    card: &'static str,
    label: String,
    described_by: Option<String>,
) -> Option<CardIdentity> {
    match CardIdentity::new(label, described_by) {
        Ok(identity) => Some(identity),
        Err(err) => {
            tracing::error!(card, error = %err, "card not rendered");
            None
        }
    }
}

/// Glass panel with a single slot for content
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GlassCard {
///         accessible_label: "Weather",
///         tier: VisualTier::Emphasized,
///         on_activate: move |_| open_forecast(),
///         p { "Sunny, 24°" }
///     }
/// }
/// ```
#[component]
pub fn GlassCard(
    accessible_label: String,
    #[props(default)] described_by_id: Option<String>,
    #[props(default)] variant: ShellVariant,
    #[props(default)] tier: VisualTier,
    /// Ignored by the base shell, which takes its radius from the tier
    #[props(default)]
    size: SizeClass,
    /// Enable hover lift and focusability
    #[props(default = true)]
    interactive: bool,
    #[props(default)] theme: ThemeMode,
    #[props(default)] on_activate: Option<EventHandler<Activation>>,
    children: Element,
) -> Element {
    let Some(identity) = identity_or_log("GlassCard", accessible_label, described_by_id) else {
        return VNode::empty();
    };
    let options = ShellOptions {
        tier,
        variant: variant.into(),
        size,
        interactive,
        theme,
    };

    rsx! {
        CardSurface {
            options,
            identity,
            on_input: move |event: InputEvent| forward_activation(&event, on_activate),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_label_skips_card() {
        assert!(identity_or_log("GlassCard", "  ".into(), None).is_none());
        assert_eq!(
            identity_or_log("GlassCard", "Weather".into(), Some("w-desc".into()))
                .and_then(|i| i.described_by().map(str::to_string)),
            Some("w-desc".to_string())
        );
    }

    #[test]
    fn unbound_activation_is_harmless() {
        forward_activation(&InputEvent::PointerClick, None);
        forward_activation(&InputEvent::key("Enter"), None);
    }
}
