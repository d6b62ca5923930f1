//! Glass Card CLI
//!
//! Thin wrapper around glasscard-core for inspecting resolved styles and
//! replaying input against a player card.
//!
//! ## Usage
//!
//! ```bash
//! # Resolved style as JSON
//! glasscard resolve --tier emphasized --variant compact
//!
//! # Inline CSS for a frosted navigation bar
//! glasscard resolve --variant navigation --size full --format css
//!
//! # Terminal preview of a card configured in a file
//! glasscard resolve --config card.json --format text
//!
//! # Replay input against a player card
//! glasscard simulate --progress 60 key:Enter progress:30 click
//! ```

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glasscard_core::{
    dispatch, AccessibilityBinding, CardConfig, CardIdentity, CardShell, CssPaint, InputEvent,
    PlaybackController, PlaybackStatus, PlayerCardConfig, ShellInput, SizeClass,
    StructuralVariant, TextRenderer, ThemeMode, VisualTier,
};

/// Glass Card - style resolution and player simulation
#[derive(Parser)]
#[command(name = "glasscard")]
#[command(version = "0.1.0")]
#[command(about = "Glass Card - style resolution and player simulation")]
struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve tier, variant and size into a style
    Resolve {
        /// Visual tier (minimal, standard, emphasized, solid)
        #[arg(short, long)]
        tier: Option<String>,

        /// Structural variant (default, compact, expanded, content, navigation)
        #[arg(long)]
        variant: Option<String>,

        /// Size class (small, medium, large, full-width)
        #[arg(short, long)]
        size: Option<String>,

        /// Color scheme (light, dark)
        #[arg(long)]
        theme: Option<String>,

        /// Accessible label used by the text preview
        #[arg(short, long)]
        label: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Card configuration file (JSON); flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay input events against a player card
    Simulate {
        /// Initial progress percent (clamped into 0..=100)
        #[arg(short, long)]
        progress: Option<i32>,

        /// Accessible label of the player
        #[arg(short, long)]
        label: Option<String>,

        /// Start in the playing state
        #[arg(long)]
        playing: bool,

        /// Player configuration file (JSON); flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Events: click, key:<name>, progress:<n>, hover, leave, focus, blur, tick:<ms>
        #[arg(required = true)]
        events: Vec<SimEvent>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Css,
    Text,
}

/// One scripted input for `simulate`
#[derive(Clone, Debug, PartialEq, Eq)]
enum SimEvent {
    Input(InputEvent),
    Progress(i32),
    Shell(ShellInput),
    Tick(u64),
}

impl FromStr for SimEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        match (name.to_ascii_lowercase().as_str(), arg) {
            ("click", None) => Ok(SimEvent::Input(InputEvent::PointerClick)),
            ("key", Some(key)) if !key.is_empty() => Ok(SimEvent::Input(InputEvent::key(key))),
            ("progress", Some(value)) => value
                .trim()
                .parse()
                .map(SimEvent::Progress)
                .map_err(|_| format!("invalid progress value: {value}")),
            ("hover", None) => Ok(SimEvent::Shell(ShellInput::PointerEnter)),
            ("leave", None) => Ok(SimEvent::Shell(ShellInput::PointerLeave)),
            ("focus", None) => Ok(SimEvent::Shell(ShellInput::FocusIn)),
            ("blur", None) => Ok(SimEvent::Shell(ShellInput::FocusOut)),
            ("tick", Some(ms)) => ms
                .trim()
                .parse()
                .map(SimEvent::Tick)
                .map_err(|_| format!("invalid tick duration: {ms}")),
            _ => Err(format!("unknown event: {s}")),
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Input(InputEvent::PointerClick) => write!(f, "click"),
            SimEvent::Input(InputEvent::Key(key)) => write!(f, "key:{key:?}"),
            SimEvent::Progress(value) => write!(f, "progress:{value}"),
            SimEvent::Shell(ShellInput::PointerEnter) => write!(f, "hover"),
            SimEvent::Shell(ShellInput::PointerLeave) => write!(f, "leave"),
            SimEvent::Shell(ShellInput::FocusIn) => write!(f, "focus"),
            SimEvent::Shell(ShellInput::FocusOut) => write!(f, "blur"),
            SimEvent::Tick(ms) => write!(f, "tick:{ms}"),
        }
    }
}

/// Default log filter when `RUST_LOG` is unset
fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn setup_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter(verbosity))),
        )
        .init();
}

fn parse_theme(raw: &str) -> Result<ThemeMode> {
    raw.parse::<ThemeMode>()
        .with_context(|| format!("invalid --theme '{raw}'"))
}

fn load_card_config(path: &Path) -> Result<CardConfig> {
    CardConfig::from_json_file(path)
        .with_context(|| format!("failed to load card config from {}", path.display()))
}

fn load_player_config(path: &Path) -> Result<PlayerCardConfig> {
    PlayerCardConfig::from_json_file(path)
        .with_context(|| format!("failed to load player config from {}", path.display()))
}

#[allow(clippy::too_many_arguments)]
fn run_resolve(
    tier: Option<String>,
    variant: Option<String>,
    size: Option<String>,
    theme: Option<String>,
    label: Option<String>,
    format: OutputFormat,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => load_card_config(&path)?,
        None => CardConfig {
            accessible_label: "Glass card".to_string(),
            ..CardConfig::default()
        },
    };

    let mut options = config.shell_options();
    if let Some(raw) = tier.as_deref() {
        options.tier = VisualTier::parse_lossy(raw);
    }
    if let Some(raw) = variant.as_deref() {
        options.variant = match config.family {
            Some(family) => StructuralVariant::parse_lossy_in(family, raw),
            None => StructuralVariant::parse_lossy(raw),
        };
    }
    if let Some(raw) = size.as_deref() {
        options.size = SizeClass::parse_lossy(raw);
    }
    if let Some(raw) = theme.as_deref() {
        options.theme = parse_theme(raw)?;
    }

    let spec = options.resolve();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
        OutputFormat::Css => {
            for declaration in CssPaint::new(options.theme).declarations(&spec) {
                println!("{declaration}");
            }
        }
        OutputFormat::Text => {
            let identity = match label {
                Some(label) => CardIdentity::new(label, None),
                None => config.identity(),
            }
            .context("text preview needs an accessible label")?;
            let body = format!(
                "tier: {}\nvariant: {}\nsize: {}",
                options.tier, options.variant, options.size
            );
            let shell = CardShell::new(options, identity, &body)?;
            println!("{}", shell.render(&TextRenderer::default(), shell.aria(), body.clone()));
        }
    }
    Ok(())
}

fn run_simulate(
    progress: Option<i32>,
    label: Option<String>,
    playing: bool,
    config: Option<PathBuf>,
    events: Vec<SimEvent>,
) -> Result<()> {
    let mut config = match config {
        Some(path) => load_player_config(&path)?,
        None => PlayerCardConfig::default(),
    };
    if let Some(progress) = progress {
        config.initial_progress_percent = progress;
    }
    if let Some(label) = label {
        config.card.accessible_label = label;
    } else if config.card.accessible_label.trim().is_empty() {
        config.card.accessible_label = "Now playing".to_string();
    }
    if playing {
        config.initially_playing = true;
    }

    let identity = config.card.identity()?;
    let body = config
        .track
        .as_ref()
        .map(|track| track.lines().join("\n"))
        .unwrap_or_else(|| identity.label().to_string());
    let mut shell = CardShell::new(config.card.shell_options(), identity.clone(), &body)?;
    let binding = AccessibilityBinding::new(&identity);

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notifications);
    let mut player = config
        .controller()
        .with_listener(move |status: PlaybackStatus| sink.borrow_mut().push(status.is_playing()));

    print_step(0, "start", &player, &binding, &shell);
    for (index, event) in events.iter().enumerate() {
        match event {
            SimEvent::Input(input) => {
                if !dispatch(input, &mut player) {
                    tracing::info!(%event, "event ignored");
                }
            }
            SimEvent::Progress(value) => {
                player.set_progress(*value);
            }
            SimEvent::Shell(input) => shell.handle(*input),
            SimEvent::Tick(ms) => {
                shell.advance(Duration::from_millis(*ms));
            }
        }

        print_step(index + 1, &event.to_string(), &player, &binding, &shell);
        for is_playing in notifications.borrow_mut().drain(..) {
            println!("    notified: {is_playing}");
        }
    }
    Ok(())
}

fn print_step(
    step: usize,
    event: &str,
    player: &PlaybackController,
    binding: &AccessibilityBinding<'_>,
    shell: &CardShell,
) {
    let aria = binding.for_playback(player.state());
    let (now, min, max) = aria.range.map(|r| r.triple()).unwrap_or_default();
    println!(
        "{step:>3} {event:<16} status={} range=({now},{min},{max}) live={} hover={:.2}",
        player.status(),
        aria.live_text.as_deref().unwrap_or("-"),
        shell.hover().amount(),
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Resolve {
            tier,
            variant,
            size,
            theme,
            label,
            format,
            config,
        } => run_resolve(tier, variant, size, theme, label, format, config),
        Commands::Simulate {
            progress,
            label,
            playing,
            config,
            events,
        } => run_simulate(progress, label, playing, config, events),
    }
}
