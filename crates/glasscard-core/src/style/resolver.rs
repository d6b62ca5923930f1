//! Style Resolution
//!
//! Each axis contributes an independently tabulated row. Alpha and blur
//! channels are summed across rows and then clamped; shadow layers are
//! selected per shell family and concatenated in paint order. When both the
//! tier and the size class propose a corner radius, the size class wins.

use super::spec::{Dimensions, EdgeAlphas, HoverDelta, Length, ShadowLayer, StyleSpec};
use super::{FrostedVariant, ShellVariant, SizeClass, StructuralVariant, VisualTier};

/// Duration of the hover/focus transition in milliseconds
pub const HOVER_TRANSITION_MS: u32 = 300;

struct TierRow {
    background_alpha: f32,
    blur_px: i32,
    saturate_percent: u16,
    border: EdgeAlphas,
    drop_shadow: ShadowLayer,
    /// Alpha of the inner top highlight on the frosted shell
    highlight_alpha: f32,
    corner_radius_px: u32,
    hover: HoverDelta,
}

struct VariantRow {
    background_alpha: f32,
    blur_px: i32,
    width: Length,
    height: Length,
}

struct SizeRow {
    background_alpha: f32,
    width: Length,
    corner_radius_px: u32,
}

fn tier_row(tier: VisualTier) -> TierRow {
    match tier {
        VisualTier::Minimal => TierRow {
            background_alpha: 0.10,
            blur_px: 8,
            saturate_percent: 110,
            border: EdgeAlphas {
                top: 0.30,
                bottom: 0.10,
                left: 0.25,
                right: 0.10,
            },
            drop_shadow: ShadowLayer::outer(2, 8, 0.08),
            highlight_alpha: 0.0,
            corner_radius_px: 12,
            hover: HoverDelta {
                background_alpha_delta: 0.05,
                translate_y_px: -2.0,
                shadow_alpha_delta: 0.04,
            },
        },
        VisualTier::Standard => TierRow {
            background_alpha: 0.20,
            blur_px: 16,
            saturate_percent: 140,
            border: EdgeAlphas {
                top: 0.50,
                bottom: 0.20,
                left: 0.40,
                right: 0.15,
            },
            drop_shadow: ShadowLayer::outer(4, 16, 0.10),
            highlight_alpha: 0.30,
            corner_radius_px: 16,
            hover: HoverDelta {
                background_alpha_delta: 0.08,
                translate_y_px: -4.0,
                shadow_alpha_delta: 0.05,
            },
        },
        VisualTier::Emphasized => TierRow {
            background_alpha: 0.30,
            blur_px: 24,
            saturate_percent: 160,
            border: EdgeAlphas {
                top: 0.65,
                bottom: 0.30,
                left: 0.55,
                right: 0.25,
            },
            drop_shadow: ShadowLayer::outer(8, 32, 0.15),
            highlight_alpha: 0.45,
            corner_radius_px: 20,
            hover: HoverDelta {
                background_alpha_delta: 0.10,
                translate_y_px: -4.0,
                shadow_alpha_delta: 0.08,
            },
        },
        VisualTier::Solid => TierRow {
            background_alpha: 0.45,
            blur_px: 40,
            saturate_percent: 180,
            border: EdgeAlphas {
                top: 0.80,
                bottom: 0.40,
                left: 0.70,
                right: 0.35,
            },
            drop_shadow: ShadowLayer::outer(12, 40, 0.20),
            highlight_alpha: 0.60,
            corner_radius_px: 24,
            hover: HoverDelta {
                background_alpha_delta: 0.05,
                translate_y_px: -6.0,
                shadow_alpha_delta: 0.10,
            },
        },
    }
}

fn variant_row(variant: StructuralVariant) -> VariantRow {
    match variant {
        StructuralVariant::Shell(ShellVariant::Default) => VariantRow {
            background_alpha: 0.0,
            blur_px: 0,
            width: Length::Px(320),
            height: Length::Auto,
        },
        StructuralVariant::Shell(ShellVariant::Compact) => VariantRow {
            background_alpha: 0.0,
            blur_px: -4,
            width: Length::Px(240),
            height: Length::Px(120),
        },
        StructuralVariant::Shell(ShellVariant::Expanded) => VariantRow {
            background_alpha: 0.05,
            blur_px: 4,
            width: Length::Px(480),
            height: Length::Px(360),
        },
        // Frosted widths come from the size class
        StructuralVariant::Frosted(FrostedVariant::Content) => VariantRow {
            background_alpha: 0.0,
            blur_px: 0,
            width: Length::Auto,
            height: Length::Auto,
        },
        StructuralVariant::Frosted(FrostedVariant::Navigation) => VariantRow {
            background_alpha: 0.05,
            blur_px: 8,
            width: Length::Auto,
            height: Length::Px(64),
        },
    }
}

fn size_row(size: SizeClass) -> SizeRow {
    match size {
        SizeClass::Small => SizeRow {
            background_alpha: 0.0,
            width: Length::Px(280),
            corner_radius_px: 12,
        },
        SizeClass::Medium => SizeRow {
            background_alpha: 0.0,
            width: Length::Px(360),
            corner_radius_px: 16,
        },
        SizeClass::Large => SizeRow {
            background_alpha: 0.0,
            width: Length::Px(480),
            corner_radius_px: 24,
        },
        SizeClass::FullWidth => SizeRow {
            background_alpha: 0.05,
            width: Length::Fill,
            corner_radius_px: 0,
        },
    }
}

/// Shadow stack of the frosted shell: thicker material, more layers.
fn frosted_shadows(tier: VisualTier, row: &TierRow) -> Vec<ShadowLayer> {
    let mut layers = vec![row.drop_shadow];
    match tier {
        VisualTier::Minimal => {}
        VisualTier::Standard | VisualTier::Emphasized => {
            layers.push(ShadowLayer::highlight(1, 0, row.highlight_alpha));
        }
        VisualTier::Solid => {
            layers.push(ShadowLayer::highlight(1, 0, row.highlight_alpha));
            layers.push(ShadowLayer::inner_shade(-1, 0, row.drop_shadow.color_alpha / 2.0));
        }
    }
    layers
}

/// Snap to three decimals so sums like 0.2 + 0.05 print cleanly.
fn tidy(alpha: f32) -> f32 {
    (alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

/// Resolve the three configuration axes into a [`StyleSpec`].
///
/// Total and pure: every combination yields a valid spec and identical
/// inputs always yield identical output. The size class only affects the
/// frosted shell family.
pub fn resolve(tier: VisualTier, variant: StructuralVariant, size: SizeClass) -> StyleSpec {
    let tier_row = tier_row(tier);
    let variant_row = variant_row(variant);

    let (size_alpha, width, corner_radius_px, shadow_layers) = match variant {
        StructuralVariant::Shell(_) => (
            0.0,
            variant_row.width,
            tier_row.corner_radius_px,
            vec![tier_row.drop_shadow],
        ),
        StructuralVariant::Frosted(_) => {
            let size_row = size_row(size);
            (
                size_row.background_alpha,
                size_row.width,
                size_row.corner_radius_px,
                frosted_shadows(tier, &tier_row),
            )
        }
    };

    let background_alpha = tidy(tier_row.background_alpha + variant_row.background_alpha + size_alpha);
    let blur_radius_px = (tier_row.blur_px + variant_row.blur_px).max(0) as u32;

    StyleSpec {
        background_alpha,
        blur_radius_px,
        saturate_percent: tier_row.saturate_percent,
        border_alpha: tier_row.border,
        shadow_layers,
        hover: tier_row.hover,
        corner_radius_px,
        dimensions: Dimensions {
            width,
            height: variant_row.height,
        },
        translate_y_px: 0.0,
        transition_ms: HOVER_TRANSITION_MS,
    }
}

/// Resolve from untrusted text, falling back per axis.
///
/// Unknown values resolve as `standard` / `default` / `medium` and are
/// logged as configuration warnings.
pub fn resolve_lossy(tier: &str, variant: &str, size: &str) -> StyleSpec {
    resolve(
        VisualTier::parse_lossy(tier),
        StructuralVariant::parse_lossy(variant),
        SizeClass::parse_lossy(size),
    )
}
