//! Accessibility Binding
//!
//! Two jobs:
//!
//! 1. Normalize input. Pointer clicks and the two confirm keys (Enter and
//!    Space) all become the same [`Activation`] signal, delivered through
//!    [`dispatch`]. Any other key is left unhandled.
//! 2. Derive ARIA attributes. [`AriaAttributes`] is computed from the
//!    current state every time; nothing is stored, so attributes cannot
//!    drift from the state they mirror.

use std::fmt;

use serde::Serialize;

use crate::identity::CardIdentity;
use crate::playback::{PlaybackState, PlaybackStatus, PROGRESS_MAX, PROGRESS_MIN};

/// Which confirm key produced a keyboard activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmKey {
    /// Confirm key
    Enter,
    /// Alternate confirm key
    Space,
}

/// Unified activation signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Activation {
    Pointer,
    Keyboard(ConfirmKey),
}

/// Map a key identity to an activation.
///
/// Accepts the DOM `key` values `"Enter"` and `" "`, plus the `"Space"`
/// and legacy `"Spacebar"` spellings some hosts report. Everything else
/// returns `None`.
pub fn normalize_key(key: &str) -> Option<Activation> {
    match key {
        "Enter" => Some(Activation::Keyboard(ConfirmKey::Enter)),
        " " | "Space" | "Spacebar" => Some(Activation::Keyboard(ConfirmKey::Space)),
        _ => None,
    }
}

/// Raw input delivered by a host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputEvent {
    PointerClick,
    Key(String),
}

impl InputEvent {
    pub fn key(key: impl Into<String>) -> Self {
        InputEvent::Key(key.into())
    }

    /// The activation this input produces, if any
    pub fn activation(&self) -> Option<Activation> {
        match self {
            InputEvent::PointerClick => Some(Activation::Pointer),
            InputEvent::Key(key) => normalize_key(key),
        }
    }
}

/// Something that reacts to the activation signal
pub trait ActivationTarget {
    fn activate(&mut self, activation: Activation);
}

/// Route an input event to `target`.
///
/// Returns `true` when the event was an activation and was delivered, so
/// hosts know whether to suppress the event's default action.
pub fn dispatch<T>(event: &InputEvent, target: &mut T) -> bool
where
    T: ActivationTarget + ?Sized,
{
    match event.activation() {
        Some(activation) => {
            target.activate(activation);
            true
        }
        None => false,
    }
}

/// Activation target for stateless cards: forwards to an optional callback
#[derive(Default)]
pub struct ActionHandler {
    callback: Option<Box<dyn FnMut(Activation)>>,
}

impl ActionHandler {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(Activation) + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Whether activating does anything
    pub fn is_bound(&self) -> bool {
        self.callback.is_some()
    }
}

impl ActivationTarget for ActionHandler {
    fn activate(&mut self, activation: Activation) {
        if let Some(callback) = self.callback.as_mut() {
            callback(activation);
        }
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHandler")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// ARIA role of the card root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AriaRole {
    Button,
    Group,
}

impl AriaRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaRole::Button => "button",
            AriaRole::Group => "group",
        }
    }
}

/// `aria-valuenow` / `aria-valuemin` / `aria-valuemax`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RangeValue {
    pub now: u8,
    pub min: u8,
    pub max: u8,
}

impl RangeValue {
    pub fn percent(now: u8) -> Self {
        Self {
            now,
            min: PROGRESS_MIN,
            max: PROGRESS_MAX,
        }
    }

    pub fn triple(&self) -> (u8, u8, u8) {
        (self.now, self.min, self.max)
    }
}

/// Complete attribute set for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AriaAttributes {
    pub role: AriaRole,
    pub label: String,
    pub described_by: Option<String>,
    /// `aria-pressed`, only for toggle cards
    pub pressed: Option<bool>,
    /// Text of the polite live region
    pub live_text: Option<String>,
    /// Range for the progress indicator
    pub range: Option<RangeValue>,
    pub focusable: bool,
}

impl AriaAttributes {
    /// Attributes for the card root element, as `(name, value)` pairs
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("role", self.role.as_str().to_string()),
            ("aria-label", self.label.clone()),
        ];
        if let Some(id) = &self.described_by {
            pairs.push(("aria-describedby", id.clone()));
        }
        if let Some(pressed) = self.pressed {
            pairs.push(("aria-pressed", pressed.to_string()));
        }
        if self.focusable {
            pairs.push(("tabindex", "0".to_string()));
        }
        pairs
    }

    /// Attributes for the progress indicator element
    pub fn progress_pairs(&self) -> Vec<(&'static str, String)> {
        match self.range {
            Some(range) => vec![
                ("role", "progressbar".to_string()),
                ("aria-valuenow", range.now.to_string()),
                ("aria-valuemin", range.min.to_string()),
                ("aria-valuemax", range.max.to_string()),
                ("aria-valuetext", format!("{}%", range.now)),
            ],
            None => Vec::new(),
        }
    }
}

/// Derives attribute sets for one card identity
#[derive(Debug, Clone, Copy)]
pub struct AccessibilityBinding<'a> {
    identity: &'a CardIdentity,
}

impl<'a> AccessibilityBinding<'a> {
    pub fn new(identity: &'a CardIdentity) -> Self {
        Self { identity }
    }

    fn described_by(&self) -> Option<String> {
        self.identity.described_by().map(str::to_string)
    }

    /// Toggle button with pressed state, live region and progress range
    pub fn for_playback(&self, state: &PlaybackState) -> AriaAttributes {
        let (verb, live) = match state.status() {
            PlaybackStatus::Idle => ("Play", "Paused"),
            PlaybackStatus::Playing => ("Pause", "Playing"),
        };
        AriaAttributes {
            role: AriaRole::Button,
            label: format!("{verb} {}", self.identity.label()),
            described_by: self.described_by(),
            pressed: Some(state.status().is_playing()),
            live_text: Some(live.to_string()),
            range: Some(RangeValue::percent(state.progress_percent())),
            focusable: true,
        }
    }

    /// Plain activatable card (icon and trip cards with a handler)
    pub fn for_action(&self) -> AriaAttributes {
        AriaAttributes {
            role: AriaRole::Button,
            label: self.identity.label().to_string(),
            described_by: self.described_by(),
            pressed: None,
            live_text: None,
            range: None,
            focusable: true,
        }
    }

    /// Non-interactive card
    pub fn for_static(&self) -> AriaAttributes {
        AriaAttributes {
            role: AriaRole::Group,
            label: self.identity.label().to_string(),
            described_by: self.described_by(),
            pressed: None,
            live_text: None,
            range: None,
            focusable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackController;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn identity() -> CardIdentity {
        CardIdentity::new("Evening jazz", Some("track-meta".to_string())).unwrap()
    }

    #[test]
    fn confirm_keys_normalize() {
        assert_eq!(normalize_key("Enter"), Some(Activation::Keyboard(ConfirmKey::Enter)));
        assert_eq!(normalize_key(" "), Some(Activation::Keyboard(ConfirmKey::Space)));
        assert_eq!(normalize_key("Spacebar"), Some(Activation::Keyboard(ConfirmKey::Space)));
    }

    #[test]
    fn other_keys_ignored() {
        for key in ["Escape", "Tab", "a", "ArrowDown", "enter", ""] {
            assert_eq!(normalize_key(key), None, "{key:?}");
        }
    }

    #[test]
    fn dispatch_reports_handled() {
        let mut controller = PlaybackController::new(0);
        assert!(dispatch(&InputEvent::PointerClick, &mut controller));
        assert!(!dispatch(&InputEvent::key("Escape"), &mut controller));
        assert_eq!(controller.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn action_handler_forwards() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut handler = ActionHandler::new(move |a| sink.borrow_mut().push(a));

        dispatch(&InputEvent::key("Enter"), &mut handler);
        dispatch(&InputEvent::PointerClick, &mut handler);
        dispatch(&InputEvent::key("x"), &mut handler);

        assert_eq!(
            *seen.borrow(),
            vec![Activation::Keyboard(ConfirmKey::Enter), Activation::Pointer]
        );
    }

    #[test]
    fn unbound_handler_is_noop() {
        let mut handler = ActionHandler::default();
        assert!(!handler.is_bound());
        assert!(dispatch(&InputEvent::PointerClick, &mut handler));
    }

    #[test]
    fn playback_attributes_mirror_state() {
        let identity = identity();
        let binding = AccessibilityBinding::new(&identity);
        let mut controller = PlaybackController::new(60);

        let idle = binding.for_playback(controller.state());
        assert_eq!(idle.pressed, Some(false));
        assert_eq!(idle.label, "Play Evening jazz");
        assert_eq!(idle.live_text.as_deref(), Some("Paused"));
        assert_eq!(idle.range.map(|r| r.triple()), Some((60, 0, 100)));

        controller.toggle();
        let playing = binding.for_playback(controller.state());
        assert_eq!(playing.pressed, Some(true));
        assert_eq!(playing.label, "Pause Evening jazz");
        assert_eq!(playing.live_text.as_deref(), Some("Playing"));
    }

    #[test]
    fn root_pairs() {
        let identity = identity();
        let attrs = AccessibilityBinding::new(&identity).for_playback(&PlaybackState::new(5));
        let pairs = attrs.pairs();
        assert!(pairs.contains(&("role", "button".to_string())));
        assert!(pairs.contains(&("aria-pressed", "false".to_string())));
        assert!(pairs.contains(&("aria-describedby", "track-meta".to_string())));
        assert!(pairs.contains(&("tabindex", "0".to_string())));
    }

    #[test]
    fn progress_pairs() {
        let identity = identity();
        let attrs = AccessibilityBinding::new(&identity).for_playback(&PlaybackState::new(42));
        let pairs = attrs.progress_pairs();
        assert_eq!(pairs[0], ("role", "progressbar".to_string()));
        assert!(pairs.contains(&("aria-valuenow", "42".to_string())));
        assert!(pairs.contains(&("aria-valuetext", "42%".to_string())));
    }

    #[test]
    fn static_card_not_focusable() {
        let identity = CardIdentity::new("Summary", None).unwrap();
        let attrs = AccessibilityBinding::new(&identity).for_static();
        assert_eq!(attrs.role, AriaRole::Group);
        assert!(attrs.progress_pairs().is_empty());
        assert!(!attrs.pairs().iter().any(|(name, _)| *name == "tabindex"));
    }
}
