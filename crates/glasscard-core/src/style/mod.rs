//! Style Axes and Resolution
//!
//! Three closed, orthogonal configuration axes select a card's look:
//!
//! - [`VisualTier`]: how much glass (translucency, blur, border light)
//! - [`StructuralVariant`]: the layout role of the shell (explicit dimensions)
//! - [`SizeClass`]: width and corner radius for the frosted shell family
//!
//! [`resolve`] combines them into a [`StyleSpec`]. Configuration arriving as
//! text goes through the `parse_lossy` constructors, which never fail: an
//! unrecognized value is logged and replaced by the axis default.

pub mod paint;
mod resolver;
mod spec;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use resolver::{resolve, resolve_lossy, HOVER_TRANSITION_MS};
pub use spec::{Dimensions, EdgeAlphas, HoverDelta, Length, ShadowLayer, ShadowTone, StyleSpec};

/// Error returned by the strict `FromStr` parsers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized {axis}: {value:?}")]
pub struct ParseAxisError {
    pub axis: &'static str,
    pub value: String,
}

/// Lowercase and drop separators so "full-width", "full_width" and
/// "fullWidth" all compare equal.
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Discrete translucency level, ordered by opacity and blur
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum VisualTier {
    /// Barely-there glass
    Minimal,
    /// Everyday card surface
    #[default]
    Standard,
    /// Foreground card that should stand out
    Emphasized,
    /// Nearly opaque, thick material
    Solid,
}

impl VisualTier {
    /// All tiers in ascending order
    pub const ALL: [VisualTier; 4] = [
        VisualTier::Minimal,
        VisualTier::Standard,
        VisualTier::Emphasized,
        VisualTier::Solid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualTier::Minimal => "minimal",
            VisualTier::Standard => "standard",
            VisualTier::Emphasized => "emphasized",
            VisualTier::Solid => "solid",
        }
    }

    /// Parse a tier, falling back to [`VisualTier::Standard`]
    pub fn parse_lossy(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err: ParseAxisError| {
            tracing::warn!(%err, fallback = "standard", "configuration fallback");
            VisualTier::default()
        })
    }
}

impl FromStr for VisualTier {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "minimal" => Ok(VisualTier::Minimal),
            "standard" => Ok(VisualTier::Standard),
            "emphasized" => Ok(VisualTier::Emphasized),
            "solid" => Ok(VisualTier::Solid),
            _ => Err(ParseAxisError {
                axis: "visual tier",
                value: s.to_string(),
            }),
        }
    }
}

impl From<String> for VisualTier {
    fn from(raw: String) -> Self {
        VisualTier::parse_lossy(&raw)
    }
}

impl fmt::Display for VisualTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shell family a variant belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShellFamily {
    /// The base glass shell
    #[default]
    Shell,
    /// The alternate frosted shell
    Frosted,
}

/// Layout role of the base glass shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShellVariant {
    #[default]
    Default,
    Compact,
    Expanded,
}

/// Layout role of the frosted shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrostedVariant {
    /// Free-height content panel
    #[default]
    Content,
    /// Fixed-height navigation bar
    Navigation,
}

/// Structural variant across both shell families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StructuralVariant {
    Shell(ShellVariant),
    Frosted(FrostedVariant),
}

impl Default for StructuralVariant {
    fn default() -> Self {
        StructuralVariant::Shell(ShellVariant::Default)
    }
}

impl StructuralVariant {
    pub const ALL: [StructuralVariant; 5] = [
        StructuralVariant::Shell(ShellVariant::Default),
        StructuralVariant::Shell(ShellVariant::Compact),
        StructuralVariant::Shell(ShellVariant::Expanded),
        StructuralVariant::Frosted(FrostedVariant::Content),
        StructuralVariant::Frosted(FrostedVariant::Navigation),
    ];

    pub fn family(&self) -> ShellFamily {
        match self {
            StructuralVariant::Shell(_) => ShellFamily::Shell,
            StructuralVariant::Frosted(_) => ShellFamily::Frosted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StructuralVariant::Shell(ShellVariant::Default) => "default",
            StructuralVariant::Shell(ShellVariant::Compact) => "compact",
            StructuralVariant::Shell(ShellVariant::Expanded) => "expanded",
            StructuralVariant::Frosted(FrostedVariant::Content) => "content",
            StructuralVariant::Frosted(FrostedVariant::Navigation) => "navigation",
        }
    }

    /// Default variant of a shell family
    pub fn default_for(family: ShellFamily) -> Self {
        match family {
            ShellFamily::Shell => StructuralVariant::Shell(ShellVariant::Default),
            ShellFamily::Frosted => StructuralVariant::Frosted(FrostedVariant::Content),
        }
    }

    /// Parse a variant of any family, falling back to the base shell default
    pub fn parse_lossy(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err: ParseAxisError| {
            tracing::warn!(%err, fallback = "default", "configuration fallback");
            StructuralVariant::default()
        })
    }

    /// Parse a variant that must belong to `family`.
    ///
    /// Names from the other family count as unrecognized.
    pub fn parse_lossy_in(family: ShellFamily, raw: &str) -> Self {
        match raw.parse::<StructuralVariant>() {
            Ok(variant) if variant.family() == family => variant,
            _ => {
                let fallback = StructuralVariant::default_for(family);
                tracing::warn!(
                    value = raw,
                    ?family,
                    fallback = fallback.as_str(),
                    "configuration fallback"
                );
                fallback
            }
        }
    }
}

impl FromStr for StructuralVariant {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "default" => Ok(StructuralVariant::Shell(ShellVariant::Default)),
            "compact" => Ok(StructuralVariant::Shell(ShellVariant::Compact)),
            "expanded" => Ok(StructuralVariant::Shell(ShellVariant::Expanded)),
            "content" => Ok(StructuralVariant::Frosted(FrostedVariant::Content)),
            "navigation" | "nav" => Ok(StructuralVariant::Frosted(FrostedVariant::Navigation)),
            _ => Err(ParseAxisError {
                axis: "structural variant",
                value: s.to_string(),
            }),
        }
    }
}

impl From<String> for StructuralVariant {
    fn from(raw: String) -> Self {
        StructuralVariant::parse_lossy(&raw)
    }
}

impl From<StructuralVariant> for String {
    fn from(variant: StructuralVariant) -> Self {
        variant.as_str().to_string()
    }
}

impl From<ShellVariant> for StructuralVariant {
    fn from(variant: ShellVariant) -> Self {
        StructuralVariant::Shell(variant)
    }
}

impl From<FrostedVariant> for StructuralVariant {
    fn from(variant: FrostedVariant) -> Self {
        StructuralVariant::Frosted(variant)
    }
}

impl fmt::Display for StructuralVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width class of the frosted shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
    /// Stretches to the container width
    FullWidth,
}

impl SizeClass {
    pub const ALL: [SizeClass; 4] = [
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::FullWidth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
            SizeClass::FullWidth => "fullWidth",
        }
    }

    /// Parse a size class, falling back to [`SizeClass::Medium`]
    pub fn parse_lossy(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err: ParseAxisError| {
            tracing::warn!(%err, fallback = "medium", "configuration fallback");
            SizeClass::default()
        })
    }
}

impl FromStr for SizeClass {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "small" | "sm" => Ok(SizeClass::Small),
            "medium" | "md" => Ok(SizeClass::Medium),
            "large" | "lg" => Ok(SizeClass::Large),
            "fullwidth" | "full" => Ok(SizeClass::FullWidth),
            _ => Err(ParseAxisError {
                axis: "size class",
                value: s.to_string(),
            }),
        }
    }
}

impl From<String> for SizeClass {
    fn from(raw: String) -> Self {
        SizeClass::parse_lossy(&raw)
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
