//! Dioxus Renderer
//!
//! Turns a [`ShellFrame`] into the card's root element: inline glass paint,
//! ARIA attributes, the progress bar and live region when present, and the
//! pointer/keyboard/focus listeners.
//!
//! Only focusable roots take activation input. Confirm keys count only while
//! the root itself holds focus; keys bubbling up from a focused control in
//! the slot are left alone.

use dioxus::prelude::*;
use glasscard_core::{CardRenderer, InputEvent, Interaction, ShellFrame, ShellInput};

/// Renders shell frames as Dioxus elements
#[derive(Clone, Copy, PartialEq, Default)]
pub struct DioxusRenderer {
    /// Receives clicks and confirm keys; without it the root ignores them
    pub on_input: Option<EventHandler<InputEvent>>,
    /// Hover/focus state owned by the hosting component. Confirm keys are
    /// forwarded only while it records the root as focused.
    pub interaction: Option<Signal<Interaction>>,
    /// Card is in its "on" state (a playing player)
    pub active: bool,
    /// Extra class for the card kind, e.g. `player-card`
    pub kind: Option<&'static str>,
}

impl DioxusRenderer {
    fn notify(&self, input: ShellInput) {
        if let Some(mut interaction) = self.interaction {
            interaction.write().apply(input);
        }
    }

    fn root_focused(&self) -> bool {
        self.interaction
            .is_some_and(|interaction| interaction.peek().focused)
    }
}

/// Class list for the root element
pub fn root_class(frame: &ShellFrame, active: bool, kind: Option<&str>) -> String {
    let mut classes = vec!["glass-card".to_string()];
    classes.push(format!("glass-card--{}", frame.theme));
    if let Some(kind) = kind {
        classes.push(kind.to_string());
    }
    if frame.aria.focusable {
        classes.push("glass-card--interactive".to_string());
    }
    if active {
        classes.push("glass-card--active".to_string());
    }
    classes.join(" ")
}

/// Whether the root takes clicks and confirm keys at all
pub fn accepts_input(frame: &ShellFrame) -> bool {
    frame.aria.focusable
}

/// Keyboard event to forward, if the key is a confirm key
pub fn keyboard_input(key: &str) -> Option<InputEvent> {
    let event = InputEvent::key(key);
    event.activation().map(|_| event)
}

/// Keyboard event to forward from the root's keydown listener.
///
/// `root_focused` is false when the key comes from a descendant.
pub fn root_key_input(key: &str, root_focused: bool) -> Option<InputEvent> {
    root_focused.then(|| keyboard_input(key)).flatten()
}

/// `(name, value)` pairs as element attributes
pub fn attributes(pairs: Vec<(&'static str, String)>) -> Vec<Attribute> {
    pairs
        .into_iter()
        .map(|(name, value)| Attribute::new(name, value, None, false))
        .collect()
}

impl CardRenderer for DioxusRenderer {
    type Node = Element;

    fn render(&self, frame: &ShellFrame, children: Element) -> Element {
        let renderer = *self;
        let on_input = self.on_input.filter(|_| accepts_input(frame));
        let class = root_class(frame, self.active, self.kind);
        let style = frame.style_attribute();
        let root_attrs = attributes(frame.aria.pairs());
        let progress_attrs = attributes(frame.aria.progress_pairs());
        let fill = frame.aria.range.map(|range| range.now);
        let live_text = frame.aria.live_text.clone();

        rsx! {
            div {
                class: "{class}",
                style: "{style}",
                onclick: move |_| {
                    if let Some(handler) = on_input {
                        handler.call(InputEvent::PointerClick);
                    }
                },
                onkeydown: move |evt: KeyboardEvent| {
                    let Some(handler) = on_input else { return };
                    let key = evt.key().to_string();
                    if let Some(event) = root_key_input(&key, renderer.root_focused()) {
                        evt.prevent_default();
                        handler.call(event);
                    }
                },
                onmouseenter: move |_| renderer.notify(ShellInput::PointerEnter),
                onmouseleave: move |_| renderer.notify(ShellInput::PointerLeave),
                onfocus: move |_| renderer.notify(ShellInput::FocusIn),
                onblur: move |_| renderer.notify(ShellInput::FocusOut),
                ..root_attrs,

                div { class: "glass-card__body", {children} }

                if let Some(now) = fill {
                    div {
                        class: "glass-card__progress",
                        ..progress_attrs,
                        div {
                            class: "glass-card__progress-fill",
                            style: "width: {now}%;",
                        }
                    }
                }

                if let Some(live) = live_text {
                    span { class: "sr-only", "aria-live": "polite", "{live}" }
                }
            }
        }
    }
}
