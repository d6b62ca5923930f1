//! CSS Paint
//!
//! Turns a [`StyleSpec`] into ordered CSS declarations. The declarations are
//! data; [`CssPaint::style_attribute`] is only a final join for renderers
//! that want an inline `style` string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::spec::{Length, ShadowLayer, ShadowTone, StyleSpec};
use super::ParseAxisError;

/// The two supported color modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Glass tint behind the content
    pub fn tint(&self) -> Rgb {
        match self {
            ThemeMode::Light => Rgb(255, 255, 255),
            ThemeMode::Dark => Rgb(15, 23, 42),
        }
    }

    /// Drop shadow and inner shade color
    pub fn shade(&self) -> Rgb {
        match self {
            ThemeMode::Light => Rgb(31, 38, 135),
            ThemeMode::Dark => Rgb(0, 0, 0),
        }
    }

    /// Border and inner highlight color
    pub fn highlight(&self) -> Rgb {
        Rgb(255, 255, 255)
    }

    /// Primary text color on the glass
    pub fn text(&self) -> Rgb {
        match self {
            ThemeMode::Light => Rgb(30, 41, 59),
            ThemeMode::Dark => Rgb(241, 245, 249),
        }
    }

    /// Accent used for active/playing state
    pub fn accent(&self) -> Rgb {
        match self {
            ThemeMode::Light => Rgb(5, 150, 105),
            ThemeMode::Dark => Rgb(52, 211, 153),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ParseAxisError {
                axis: "theme mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn with_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, fmt_alpha(alpha))
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Format an alpha with at most three decimals and no trailing zeros.
fn fmt_alpha(alpha: f32) -> String {
    let fixed = format!("{:.3}", alpha.clamp(0.0, 1.0));
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn fmt_length(length: Length) -> Option<String> {
    match length {
        Length::Auto => None,
        Length::Px(px) => Some(format!("{px}px")),
        Length::Fill => Some("100%".to_string()),
    }
}

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssDeclaration {
    pub property: &'static str,
    pub value: String,
}

impl CssDeclaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl fmt::Display for CssDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Paints style specs for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CssPaint {
    theme: ThemeMode,
}

impl CssPaint {
    pub fn new(theme: ThemeMode) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    fn shadow(&self, layer: &ShadowLayer) -> String {
        let color = match layer.tone {
            ShadowTone::Shade => self.theme.shade(),
            ShadowTone::Highlight => self.theme.highlight(),
        };
        let inset = if layer.inset { "inset " } else { "" };
        format!(
            "{inset}{}px {}px {}px {}px {}",
            layer.offset_x,
            layer.offset_y,
            layer.blur_px,
            layer.spread_px,
            color.with_alpha(layer.color_alpha)
        )
    }

    /// Declarations for `spec`, in a stable order
    pub fn declarations(&self, spec: &StyleSpec) -> Vec<CssDeclaration> {
        let edge = self.theme.highlight();
        let filter = format!(
            "blur({}px) saturate({}%)",
            spec.blur_radius_px, spec.saturate_percent
        );
        let shadows = if spec.shadow_layers.is_empty() {
            "none".to_string()
        } else {
            spec.shadow_layers
                .iter()
                .map(|layer| self.shadow(layer))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut decls = vec![
            CssDeclaration::new("background-color", self.theme.tint().with_alpha(spec.background_alpha)),
            CssDeclaration::new("backdrop-filter", filter.clone()),
            CssDeclaration::new("-webkit-backdrop-filter", filter),
            CssDeclaration::new("border-width", "1px"),
            CssDeclaration::new("border-style", "solid"),
            CssDeclaration::new("border-top-color", edge.with_alpha(spec.border_alpha.top)),
            CssDeclaration::new("border-right-color", edge.with_alpha(spec.border_alpha.right)),
            CssDeclaration::new("border-bottom-color", edge.with_alpha(spec.border_alpha.bottom)),
            CssDeclaration::new("border-left-color", edge.with_alpha(spec.border_alpha.left)),
            CssDeclaration::new("border-radius", format!("{}px", spec.corner_radius_px)),
            CssDeclaration::new("box-shadow", shadows),
            CssDeclaration::new("color", self.theme.text().hex()),
        ];

        if let Some(width) = fmt_length(spec.dimensions.width) {
            decls.push(CssDeclaration::new("width", width));
        }
        if let Some(height) = fmt_length(spec.dimensions.height) {
            decls.push(CssDeclaration::new("height", height));
        }
        if spec.translate_y_px != 0.0 {
            decls.push(CssDeclaration::new(
                "transform",
                format!("translateY({}px)", fmt_px(spec.translate_y_px)),
            ));
        }

        let ms = spec.transition_ms;
        decls.push(CssDeclaration::new(
            "transition",
            format!(
                "background-color {ms}ms ease, box-shadow {ms}ms ease, transform {ms}ms ease"
            ),
        ));
        decls
    }

    /// Declarations joined into an inline `style` attribute
    pub fn style_attribute(&self, spec: &StyleSpec) -> String {
        self.declarations(spec)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Format a pixel offset with at most two decimals.
fn fmt_px(px: f32) -> String {
    let fixed = format!("{:.2}", px);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{resolve, FrostedVariant, ShellVariant, SizeClass, VisualTier};

    fn value<'a>(decls: &'a [CssDeclaration], property: &str) -> Option<&'a str> {
        decls
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    #[test]
    fn alpha_formatting() {
        assert_eq!(fmt_alpha(0.2), "0.2");
        assert_eq!(fmt_alpha(0.25), "0.25");
        assert_eq!(fmt_alpha(1.0), "1");
        assert_eq!(fmt_alpha(0.0), "0");
    }

    #[test]
    fn standard_default_light() {
        let spec = resolve(VisualTier::Standard, ShellVariant::Default.into(), SizeClass::Medium);
        let decls = CssPaint::new(ThemeMode::Light).declarations(&spec);

        assert_eq!(value(&decls, "background-color"), Some("rgba(255, 255, 255, 0.2)"));
        assert_eq!(value(&decls, "backdrop-filter"), Some("blur(16px) saturate(140%)"));
        assert_eq!(value(&decls, "border-top-color"), Some("rgba(255, 255, 255, 0.5)"));
        assert_eq!(value(&decls, "box-shadow"), Some("0px 4px 16px 0px rgba(31, 38, 135, 0.1)"));
        assert_eq!(value(&decls, "width"), Some("320px"));
        assert_eq!(value(&decls, "height"), None);
        assert_eq!(value(&decls, "transform"), None);
    }

    #[test]
    fn dark_theme_changes_tint_only() {
        let spec = resolve(VisualTier::Minimal, ShellVariant::Default.into(), SizeClass::Medium);
        let light = CssPaint::new(ThemeMode::Light).declarations(&spec);
        let dark = CssPaint::new(ThemeMode::Dark).declarations(&spec);

        assert_eq!(value(&dark, "background-color"), Some("rgba(15, 23, 42, 0.1)"));
        assert_eq!(value(&light, "border-radius"), value(&dark, "border-radius"));
        assert_eq!(value(&light, "backdrop-filter"), value(&dark, "backdrop-filter"));
    }

    #[test]
    fn frosted_solid_paints_inset_layers() {
        let spec = resolve(VisualTier::Solid, FrostedVariant::Content.into(), SizeClass::FullWidth);
        let decls = CssPaint::new(ThemeMode::Light).declarations(&spec);
        let shadow = value(&decls, "box-shadow").unwrap();

        assert_eq!(shadow.matches("inset").count(), 2);
        assert!(shadow.contains("inset 0px 1px 0px 0px rgba(255, 255, 255, 0.6)"));
        assert_eq!(value(&decls, "width"), Some("100%"));
        assert_eq!(value(&decls, "border-radius"), Some("0px"));
    }

    #[test]
    fn hover_adds_transform() {
        let spec = resolve(VisualTier::Standard, ShellVariant::Default.into(), SizeClass::Medium);
        let decls = CssPaint::new(ThemeMode::Light).declarations(&spec.with_hover(0.5));
        assert_eq!(value(&decls, "transform"), Some("translateY(-2px)"));
    }

    #[test]
    fn style_attribute_joins_declarations() {
        let spec = resolve(VisualTier::Standard, ShellVariant::Compact.into(), SizeClass::Medium);
        let style = CssPaint::default().style_attribute(&spec);
        assert!(style.starts_with("background-color: rgba(255, 255, 255, 0.2);"));
        assert!(style.contains("height: 120px;"));
        assert!(style.ends_with("transform 300ms ease;"));
    }

    #[test]
    fn theme_parse() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
