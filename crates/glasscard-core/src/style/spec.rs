//! Resolved paint parameters for one card

use serde::Serialize;

/// Border translucency per edge.
///
/// Top and left edges catch the light, so they are never dimmer than the
/// bottom and right edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeAlphas {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl EdgeAlphas {
    /// Whether the single-light-source rule holds
    pub fn is_lit_from_top_left(&self) -> bool {
        let lit = self.top.min(self.left);
        let shaded = self.bottom.max(self.right);
        lit >= shaded
    }
}

/// Which paint color a shadow layer takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadowTone {
    /// Theme shadow tint
    Shade,
    /// Theme highlight (light catching an edge)
    Highlight,
}

/// One `box-shadow` layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowLayer {
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur_px: u32,
    pub spread_px: i32,
    pub color_alpha: f32,
    /// Inset layers simulate light inside the material
    pub inset: bool,
    pub tone: ShadowTone,
}

impl ShadowLayer {
    /// Drop shadow under the card
    pub const fn outer(offset_y: i32, blur_px: u32, color_alpha: f32) -> Self {
        Self {
            offset_x: 0,
            offset_y,
            blur_px,
            spread_px: 0,
            color_alpha,
            inset: false,
            tone: ShadowTone::Shade,
        }
    }

    /// Inner highlight along the top edge
    pub const fn highlight(offset_y: i32, blur_px: u32, color_alpha: f32) -> Self {
        Self {
            offset_x: 0,
            offset_y,
            blur_px,
            spread_px: 0,
            color_alpha,
            inset: true,
            tone: ShadowTone::Highlight,
        }
    }

    /// Inner shade along the bottom edge
    pub const fn inner_shade(offset_y: i32, blur_px: u32, color_alpha: f32) -> Self {
        Self {
            offset_x: 0,
            offset_y,
            blur_px,
            spread_px: 0,
            color_alpha,
            inset: true,
            tone: ShadowTone::Shade,
        }
    }
}

/// Change applied on top of the resting style while hovered or focused
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoverDelta {
    pub background_alpha_delta: f32,
    /// Negative values lift the card
    pub translate_y_px: f32,
    pub shadow_alpha_delta: f32,
}

/// A layout length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Length {
    /// Sized by content
    Auto,
    Px(u32),
    /// Fills the containing block
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: Length,
    pub height: Length,
}

/// Fully resolved, immutable paint parameters for one card instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSpec {
    pub background_alpha: f32,
    pub blur_radius_px: u32,
    pub saturate_percent: u16,
    pub border_alpha: EdgeAlphas,
    pub shadow_layers: Vec<ShadowLayer>,
    pub hover: HoverDelta,
    pub corner_radius_px: u32,
    pub dimensions: Dimensions,
    /// Vertical offset currently applied; zero at rest
    pub translate_y_px: f32,
    pub transition_ms: u32,
}

impl StyleSpec {
    /// The style with `amount` (0..=1) of the hover delta applied.
    ///
    /// `self` is left untouched; hover is always derived from the resting
    /// spec.
    pub fn with_hover(&self, amount: f32) -> StyleSpec {
        let amount = amount.clamp(0.0, 1.0);
        if amount == 0.0 {
            return self.clone();
        }

        let mut hovered = self.clone();
        hovered.background_alpha =
            (self.background_alpha + self.hover.background_alpha_delta * amount).clamp(0.0, 1.0);
        hovered.translate_y_px = self.translate_y_px + self.hover.translate_y_px * amount;
        for layer in hovered.shadow_layers.iter_mut().filter(|l| !l.inset) {
            layer.color_alpha =
                (layer.color_alpha + self.hover.shadow_alpha_delta * amount).clamp(0.0, 1.0);
        }
        hovered
    }

    pub fn outer_shadows(&self) -> impl Iterator<Item = &ShadowLayer> {
        self.shadow_layers.iter().filter(|l| !l.inset)
    }

    pub fn inset_shadows(&self) -> impl Iterator<Item = &ShadowLayer> {
        self.shadow_layers.iter().filter(|l| l.inset)
    }
}
