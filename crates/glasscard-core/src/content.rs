//! Content of the compositional cards
//!
//! Icon, trip and player cards carry text only; they own no state of their
//! own. Required fields are checked once, at construction.

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

fn required(card: &'static str, field: &'static str, value: String) -> CardResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(CardError::MissingField { card, field })
    } else {
        Ok(value)
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Icon with a title and optional subtitle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconCardContent {
    pub icon: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl IconCardContent {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        subtitle: Option<String>,
    ) -> CardResult<Self> {
        Ok(Self {
            icon: required("IconCard", "icon", icon.into())?,
            title: required("IconCard", "title", title.into())?,
            subtitle: optional(subtitle),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{}  {}", self.icon, self.title)];
        lines.extend(self.subtitle.clone());
        lines
    }
}

/// Travel summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCardContent {
    pub destination: String,
    pub dates: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travelers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl TripCardContent {
    pub fn new(
        destination: impl Into<String>,
        dates: impl Into<String>,
        travelers: Option<String>,
        price: Option<String>,
    ) -> CardResult<Self> {
        Ok(Self {
            destination: required("TripCard", "destination", destination.into())?,
            dates: required("TripCard", "dates", dates.into())?,
            travelers: optional(travelers),
            price: optional(price),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.destination.clone(), self.dates.clone()];
        match (&self.travelers, &self.price) {
            (Some(travelers), Some(price)) => lines.push(format!("{travelers} · {price}")),
            (Some(one), None) | (None, Some(one)) => lines.push(one.clone()),
            (None, None) => {}
        }
        lines
    }
}

/// Track shown on the player card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCardContent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl PlayerCardContent {
    pub fn new(title: impl Into<String>, artist: Option<String>) -> CardResult<Self> {
        Ok(Self {
            title: required("PlayerCard", "title", title.into())?,
            artist: optional(artist),
        })
    }

    /// Re-check a value that arrived through deserialization
    pub fn validated(self) -> CardResult<Self> {
        Self::new(self.title, self.artist)
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        lines.extend(self.artist.clone());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_card_requires_title() {
        let err = IconCardContent::new("☀", " ", None).unwrap_err();
        assert!(matches!(
            err,
            CardError::MissingField {
                card: "IconCard",
                field: "title"
            }
        ));
    }

    #[test]
    fn trip_card_requires_destination_and_dates() {
        assert!(TripCardContent::new("", "May 3 – May 9", None, None).is_err());
        assert!(TripCardContent::new("Lisbon", "", None, None).is_err());

        let trip = TripCardContent::new("Lisbon", "May 3 – May 9", Some("2 adults".into()), None)
            .unwrap();
        assert_eq!(trip.lines(), vec!["Lisbon", "May 3 – May 9", "2 adults"]);
    }

    #[test]
    fn blank_optionals_dropped() {
        let player = PlayerCardContent::new("Clair de Lune", Some("  ".into())).unwrap();
        assert_eq!(player.artist, None);
        assert_eq!(player.lines(), vec!["Clair de Lune"]);
    }

    #[test]
    fn deserialized_content_is_revalidated() {
        let raw: PlayerCardContent = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(raw.validated().is_err());
    }

    #[test]
    fn trip_lines_join_travelers_and_price() {
        let trip = TripCardContent::new(
            "Kyoto",
            "Oct 2 – Oct 12",
            Some("1 adult".into()),
            Some("$1,240".into()),
        )
        .unwrap();
        assert_eq!(trip.lines()[2], "1 adult · $1,240");
    }
}
