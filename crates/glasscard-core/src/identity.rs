//! Card identity used for accessibility output

use serde::Serialize;

use crate::error::{CardError, CardResult};

/// Accessible name and description reference of a card.
///
/// Immutable once built. Only ever read to produce ARIA attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardIdentity {
    accessible_label: String,
    described_by_id: Option<String>,
}

impl CardIdentity {
    /// Create an identity; a blank label is rejected since an unlabeled
    /// interactive element cannot be announced.
    pub fn new(
        accessible_label: impl Into<String>,
        described_by_id: Option<String>,
    ) -> CardResult<Self> {
        let accessible_label = accessible_label.into().trim().to_string();
        if accessible_label.is_empty() {
            return Err(CardError::MissingLabel);
        }
        let described_by_id = described_by_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        Ok(Self {
            accessible_label,
            described_by_id,
        })
    }

    pub fn label(&self) -> &str {
        &self.accessible_label
    }

    pub fn described_by(&self) -> Option<&str> {
        self.described_by_id.as_deref()
    }
}
