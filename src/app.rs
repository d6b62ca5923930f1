use dioxus::prelude::*;
use glasscard_core::{Activation, FrostedVariant, ShellVariant, StructuralVariant};
use glasscard_ui::{FrostedCard, GlassCard, IconCard, PlayerCard, TripCard, GLASS_STYLES};

use crate::theme::GLOBAL_STYLES;
use crate::{get_preview, CardKind};

/// Root application component.
///
/// Renders the one configured card over a gradient backdrop, with a caption
/// naming the resolved axes and a line echoing the last callback.
#[component]
pub fn App() -> Element {
    let preview = use_hook(get_preview);
    let mut last_event = use_signal(String::new);

    let card = &preview.config.card;
    let theme = card.theme;
    let tier = card.visual_tier;
    let size = card.size_class;
    let variant = card.variant();
    let label = card.accessible_label.clone();
    let described_by = card.described_by_id.clone();
    let caption = format!("{:?} · {tier} · {variant} · {size} · {theme}", preview.kind);

    let on_activate = move |activation: Activation| {
        tracing::info!(?activation, "card activated");
        last_event.set(format!("activated ({activation:?})"));
    };

    let body = match preview.kind {
        CardKind::Shell => rsx! {
            GlassCard {
                accessible_label: label,
                described_by_id: described_by,
                variant: shell_variant(variant),
                tier,
                size,
                interactive: card.interactive,
                theme,
                on_activate,
                p { "Glass picks up whatever sits behind it." }
            }
        },
        CardKind::Frosted => rsx! {
            FrostedCard {
                accessible_label: label,
                described_by_id: described_by,
                variant: frosted_variant(variant),
                tier,
                size,
                interactive: card.interactive,
                theme,
                on_activate,
                p { "Frosted panels blur harder and carry an inner highlight." }
            }
        },
        CardKind::Player => {
            let (title, artist) = match &preview.config.track {
                Some(track) => (track.title.clone(), track.artist.clone()),
                None => ("Clair de Lune".to_string(), Some("Claude Debussy".to_string())),
            };
            rsx! {
                PlayerCard {
                    title,
                    artist,
                    accessible_label: label,
                    described_by_id: described_by,
                    tier,
                    variant: shell_variant(variant),
                    theme,
                    initial_progress_percent: preview.config.initial_progress_percent,
                    initially_playing: preview.config.initially_playing,
                    on_status_change: move |playing: bool| {
                        tracing::info!(playing, "playback status changed");
                        last_event.set(format!("status change: playing = {playing}"));
                    },
                }
            }
        }
        CardKind::Icon => rsx! {
            IconCard {
                icon: "\u{2600}".to_string(),
                title: "Weather".to_string(),
                subtitle: "Sunny, 24\u{00B0}".to_string(),
                tier,
                theme,
                on_activate,
            }
        },
        CardKind::Trip => rsx! {
            TripCard {
                destination: "Lisbon".to_string(),
                dates: "May 3 \u{2013} May 9".to_string(),
                travelers: "2 adults".to_string(),
                price: "$1,240".to_string(),
                tier,
                size,
                theme,
                on_activate,
            }
        },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {GLASS_STYLES} }
        main { class: "preview preview--{theme}",
            {body}
            p { class: "preview__caption", "{caption}" }
            p { class: "preview__log", "{last_event}" }
        }
    }
}

fn shell_variant(variant: StructuralVariant) -> ShellVariant {
    match variant {
        StructuralVariant::Shell(variant) => variant,
        StructuralVariant::Frosted(_) => ShellVariant::default(),
    }
}

fn frosted_variant(variant: StructuralVariant) -> FrostedVariant {
    match variant {
        StructuralVariant::Frosted(variant) => variant,
        StructuralVariant::Shell(_) => FrostedVariant::default(),
    }
}
