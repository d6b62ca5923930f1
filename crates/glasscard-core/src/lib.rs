//! Glass Card Core Library
//!
//! Style resolution and interaction state for translucent "glass" cards.
//!
//! ## Overview
//!
//! Every card in the family shares two mechanisms:
//!
//! - **Style resolution**: a pure function mapping a [`VisualTier`], a
//!   [`StructuralVariant`] and a [`SizeClass`] to an immutable [`StyleSpec`]
//!   (translucency, blur, per-edge borders, layered shadows, hover deltas).
//! - **Interaction contract**: a [`PlaybackController`] state machine whose
//!   transitions are driven by a single activation path that pointer and
//!   keyboard input both feed, with ARIA attributes derived from the state
//!   by [`AccessibilityBinding`].
//!
//! Nothing here depends on a UI framework. Renderers implement
//! [`CardRenderer`]; the `glasscard-ui` crate provides the Dioxus one and
//! [`TextRenderer`] draws cards in a terminal.
//!
//! ## Quick Start
//!
//! ```
//! use glasscard_core::{
//!     dispatch, AccessibilityBinding, CardIdentity, InputEvent, PlaybackController,
//!     PlaybackStatus,
//! };
//!
//! let identity = CardIdentity::new("Morning mix", None).unwrap();
//! let mut player = PlaybackController::new(60);
//!
//! dispatch(&InputEvent::key("Enter"), &mut player);
//! assert_eq!(player.status(), PlaybackStatus::Playing);
//!
//! let aria = AccessibilityBinding::new(&identity).for_playback(player.state());
//! assert_eq!(aria.pressed, Some(true));
//! assert_eq!(aria.live_text.as_deref(), Some("Playing"));
//! ```

pub mod a11y;
pub mod config;
pub mod content;
pub mod error;
pub mod identity;
pub mod playback;
pub mod render;
pub mod shell;
pub mod style;

// Re-exports
pub use a11y::{
    dispatch, normalize_key, AccessibilityBinding, ActionHandler, Activation, ActivationTarget,
    AriaAttributes, AriaRole, ConfirmKey, InputEvent, RangeValue,
};
pub use config::{CardConfig, PlayerCardConfig, DEFAULT_INITIAL_PROGRESS};
pub use content::{IconCardContent, PlayerCardContent, TripCardContent};
pub use error::{CardError, CardResult};
pub use identity::CardIdentity;
pub use playback::{PlaybackController, PlaybackState, PlaybackStatus, PROGRESS_MAX, PROGRESS_MIN};
pub use render::{CardRenderer, ShellFrame, TextRenderer};
pub use shell::{CardShell, HoverTransition, Interaction, ShellInput, ShellOptions, SlotContent};
pub use style::paint::{CssDeclaration, CssPaint, Rgb, ThemeMode};
pub use style::{
    resolve, resolve_lossy, Dimensions, EdgeAlphas, FrostedVariant, HoverDelta, Length,
    ParseAxisError, ShadowLayer, ShadowTone, ShellFamily, ShellVariant, SizeClass,
    StructuralVariant, StyleSpec, VisualTier, HOVER_TRANSITION_MS,
};
