#![allow(non_snake_case)]

mod app;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use glasscard_core::{PlayerCardConfig, ShellFamily, SizeClass, ThemeMode, VisualTier};

/// Which card the window shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum CardKind {
    #[default]
    Shell,
    Frosted,
    Player,
    Icon,
    Trip,
}

impl CardKind {
    fn family(&self) -> ShellFamily {
        match self {
            CardKind::Frosted | CardKind::Trip => ShellFamily::Frosted,
            CardKind::Shell | CardKind::Player | CardKind::Icon => ShellFamily::Shell,
        }
    }
}

/// Everything the preview renders, fixed at startup
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    pub kind: CardKind,
    pub config: PlayerCardConfig,
}

/// Preview settings, set from the command line
static PREVIEW: OnceLock<Preview> = OnceLock::new();

/// Get the preview settings (defaults if none were stored)
pub fn get_preview() -> Preview {
    PREVIEW.get().cloned().unwrap_or_else(|| Preview {
        kind: CardKind::default(),
        config: PlayerCardConfig::default(),
    })
}

/// Glass Card - single-card preview window
#[derive(Parser, Debug)]
#[command(name = "glasscard-desktop")]
#[command(about = "Glass Card - preview one card in a desktop window")]
struct Args {
    /// Card to show
    #[arg(long, value_enum, default_value_t = CardKind::Shell)]
    card: CardKind,

    /// Visual tier (minimal, standard, emphasized, solid)
    #[arg(short, long)]
    tier: Option<String>,

    /// Structural variant, scoped to the card's family
    #[arg(long)]
    variant: Option<String>,

    /// Size class (small, medium, large, full-width)
    #[arg(short, long)]
    size: Option<String>,

    /// Color scheme (light, dark)
    #[arg(long)]
    theme: Option<String>,

    /// Card configuration file (JSON); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn into_preview(self) -> Result<Preview> {
        let mut config = match &self.config {
            Some(path) => PlayerCardConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => PlayerCardConfig::default(),
        };

        config.card.family = Some(self.card.family());
        if let Some(raw) = self.variant {
            config.card.variant = Some(raw);
        }
        if let Some(raw) = self.tier.as_deref() {
            config.card.visual_tier = VisualTier::parse_lossy(raw);
        }
        if let Some(raw) = self.size.as_deref() {
            config.card.size_class = SizeClass::parse_lossy(raw);
        }
        if let Some(raw) = self.theme.as_deref() {
            config.card.theme = raw
                .parse::<ThemeMode>()
                .with_context(|| format!("invalid --theme '{raw}'"))?;
        }
        if config.card.accessible_label.trim().is_empty() {
            config.card.accessible_label = match self.card {
                CardKind::Player => "Now playing".to_string(),
                _ => "Glass card preview".to_string(),
            };
        }

        Ok(Preview {
            kind: self.card,
            config,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let preview = args.into_preview()?;

    tracing::info!(
        card = ?preview.kind,
        tier = %preview.config.card.visual_tier,
        variant = %preview.config.card.variant(),
        size = %preview.config.card.size_class,
        "starting preview"
    );

    let title = format!("Glass Card - {:?}", preview.kind);
    let _ = PREVIEW.set(preview);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 640.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glasscard_core::{FrostedVariant, ShellVariant, StructuralVariant};

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["glasscard-desktop"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn variant_is_scoped_to_card_family() {
        let preview = args(&["--card", "trip", "--variant", "compact"])
            .into_preview()
            .unwrap();
        assert_eq!(
            preview.config.card.variant(),
            StructuralVariant::Frosted(FrostedVariant::Content)
        );

        let preview = args(&["--card", "shell", "--variant", "expanded"])
            .into_preview()
            .unwrap();
        assert_eq!(
            preview.config.card.variant(),
            StructuralVariant::Shell(ShellVariant::Expanded)
        );
    }

    #[test]
    fn player_gets_default_label() {
        let preview = args(&["--card", "player"]).into_preview().unwrap();
        assert_eq!(preview.config.card.accessible_label, "Now playing");
        assert_eq!(preview.config.initial_progress_percent, 60);
    }

    #[test]
    fn bad_theme_is_an_error() {
        assert!(args(&["--theme", "sepia"]).into_preview().is_err());
    }
}
