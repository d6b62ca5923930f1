//! Card configuration documents
//!
//! JSON with camelCase keys. Enum-valued fields decode through the lossy
//! parsers, so a typo in `visualTier` degrades to the default instead of
//! rejecting the whole document. Missing identity is still an error, raised
//! when the identity is built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::PlayerCardContent;
use crate::error::CardResult;
use crate::identity::CardIdentity;
use crate::playback::PlaybackController;
use crate::shell::ShellOptions;
use crate::style::paint::ThemeMode;
use crate::style::{ShellFamily, SizeClass, StructuralVariant, VisualTier};

/// Initial progress of a player card when none is configured
pub const DEFAULT_INITIAL_PROGRESS: i32 = 60;

fn default_interactive() -> bool {
    true
}

fn default_progress() -> i32 {
    DEFAULT_INITIAL_PROGRESS
}

/// Options shared by every card shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    /// Restricts `variant` to one shell family when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<ShellFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default)]
    pub visual_tier: VisualTier,
    #[serde(default)]
    pub size_class: SizeClass,
    #[serde(default = "default_interactive")]
    pub interactive: bool,
    #[serde(default)]
    pub accessible_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub described_by_id: Option<String>,
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            family: None,
            variant: None,
            visual_tier: VisualTier::default(),
            size_class: SizeClass::default(),
            interactive: true,
            accessible_label: String::new(),
            described_by_id: None,
            theme: ThemeMode::default(),
        }
    }
}

impl CardConfig {
    pub fn from_json_str(json: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CardResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Variant after family scoping and fallback
    pub fn variant(&self) -> StructuralVariant {
        match (self.family, self.variant.as_deref()) {
            (Some(family), Some(raw)) => StructuralVariant::parse_lossy_in(family, raw),
            (Some(family), None) => StructuralVariant::default_for(family),
            (None, Some(raw)) => StructuralVariant::parse_lossy(raw),
            (None, None) => StructuralVariant::default(),
        }
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            tier: self.visual_tier,
            variant: self.variant(),
            size: self.size_class,
            interactive: self.interactive,
            theme: self.theme,
        }
    }

    pub fn identity(&self) -> CardResult<CardIdentity> {
        CardIdentity::new(self.accessible_label.clone(), self.described_by_id.clone())
    }
}

/// Player card: shell options plus playback setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCardConfig {
    #[serde(flatten)]
    pub card: CardConfig,
    #[serde(default = "default_progress")]
    pub initial_progress_percent: i32,
    #[serde(default)]
    pub initially_playing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<PlayerCardContent>,
}

impl Default for PlayerCardConfig {
    fn default() -> Self {
        Self {
            card: CardConfig::default(),
            initial_progress_percent: DEFAULT_INITIAL_PROGRESS,
            initially_playing: false,
            track: None,
        }
    }
}

impl PlayerCardConfig {
    /// Parse a player configuration. A `track` that is present must carry
    /// a non-empty title.
    pub fn from_json_str(json: &str) -> CardResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.track = config.track.map(PlayerCardContent::validated).transpose()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CardResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Fresh controller for this configuration, without a listener
    pub fn controller(&self) -> PlaybackController {
        PlaybackController::new(self.initial_progress_percent).initially_playing(self.initially_playing)
    }
}
