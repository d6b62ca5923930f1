//! Glass Card UI Components
//!
//! Dioxus renderings of the cards defined in `glasscard-core`. Components
//! hold no styling logic of their own: every visual value comes from a
//! resolved `StyleSpec` painted as inline CSS, and every ARIA attribute
//! comes from the core accessibility binding.
//!
//! ## Cards
//!
//! - **GlassCard**: base shell (default, compact, expanded)
//! - **FrostedCard**: frosted shell with size classes (content, navigation)
//! - **PlayerCard**: play/pause toggle with progress and a live region
//! - **IconCard** / **TripCard**: stateless content cards
//!
//! Include [`GLASS_STYLES`] once in the document head for typography and the
//! screen-reader-only helper class.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::GLASS_STYLES;
