//! Player Card
//!
//! Play/pause toggle on a glass shell. The controller lives in a signal and
//! is the only place the status changes; the root element's `aria-pressed`,
//! the progress bar and the polite live region are all derived from its
//! state on the next render.
//!
//! ## Inputs
//!
//! | Input | Effect |
//! |-------|--------|
//! | click on the card | toggle |
//! | Enter / Space while focused | toggle (default action suppressed) |
//! | seek slider | set progress, status unchanged |

use dioxus::prelude::*;
use glasscard_core::{
    dispatch, AccessibilityBinding, InputEvent, PlaybackController, PlayerCardContent,
    ShellOptions, ShellVariant, SizeClass, ThemeMode, VisualTier, DEFAULT_INITIAL_PROGRESS,
};

use super::glass_card::identity_or_log;
use super::surface::CardSurface;

/// Glyph on the toggle: what activating will do next
pub fn toggle_glyph(playing: bool) -> &'static str {
    if playing {
        "\u{275A}\u{275A}"
    } else {
        "\u{25B6}"
    }
}

/// Parse a slider value; anything unparseable is ignored
pub fn parse_seek(raw: &str) -> Option<i32> {
    raw.trim().parse::<f64>().ok().map(|v| v.round() as i32)
}

#[component]
pub fn PlayerCard(
    /// Track title (required)
    title: String,
    #[props(default)] artist: Option<String>,
    accessible_label: String,
    #[props(default)] described_by_id: Option<String>,
    #[props(default)] tier: VisualTier,
    #[props(default)] variant: ShellVariant,
    #[props(default)] theme: ThemeMode,
    /// Clamped into 0..=100
    #[props(default = DEFAULT_INITIAL_PROGRESS)]
    initial_progress_percent: i32,
    #[props(default = false)] initially_playing: bool,
    /// Called with the new "is playing" value after every toggle
    #[props(default)]
    on_status_change: Option<EventHandler<bool>>,
) -> Element {
    let mut controller = use_signal(move || {
        PlaybackController::new(initial_progress_percent)
            .initially_playing(initially_playing)
            .with_listener(move |status| {
                if let Some(handler) = on_status_change {
                    handler.call(status.is_playing());
                }
            })
    });

    let content = match PlayerCardContent::new(title, artist) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(error = %err, "card not rendered");
            return VNode::empty();
        }
    };
    let Some(identity) = identity_or_log("PlayerCard", accessible_label, described_by_id) else {
        return VNode::empty();
    };

    let state = *controller.read().state();
    let playing = state.status().is_playing();
    let progress = state.progress_percent();
    let aria = AccessibilityBinding::new(&identity).for_playback(&state);
    let options = ShellOptions {
        tier,
        variant: variant.into(),
        size: SizeClass::default(),
        interactive: true,
        theme,
    };
    let glyph = toggle_glyph(playing);
    let accent = theme.accent().hex();

    rsx! {
        CardSurface {
            options,
            identity,
            aria,
            active: playing,
            kind: "player-card",
            on_input: move |event: InputEvent| {
                dispatch(&event, &mut *controller.write());
            },

            div { class: "player-card__row",
                span {
                    class: "player-card__toggle",
                    style: "color: {accent};",
                    "aria-hidden": "true",
                    "{glyph}"
                }
                div { class: "player-card__track",
                    span { class: "player-card__title", "{content.title}" }
                    if let Some(artist) = content.artist.clone() {
                        span { class: "player-card__artist", "{artist}" }
                    }
                }
            }
            input {
                class: "player-card__seek",
                r#type: "range",
                min: "0",
                max: "100",
                value: "{progress}",
                "aria-label": "Seek",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt| evt.stop_propagation(),
                oninput: move |evt: FormEvent| {
                    if let Some(value) = parse_seek(&evt.value()) {
                        controller.write().set_progress(value);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_shows_next_action() {
        assert_eq!(toggle_glyph(false), "\u{25B6}");
        assert_ne!(toggle_glyph(true), toggle_glyph(false));
    }

    #[test]
    fn seek_values_parse_loosely() {
        assert_eq!(parse_seek("42"), Some(42));
        assert_eq!(parse_seek(" 12.6 "), Some(13));
        assert_eq!(parse_seek("abc"), None);
    }
}
