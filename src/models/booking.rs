use serde::{Deserialize, Serialize};

/// A hotel or transport option the user has already confirmed. Supplied by
/// the caller as read-only input to itinerary generation.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BookingSelection {
    #[serde(default)]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
}

impl BookingSelection {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.title.is_empty() {
            fallback
        } else {
            &self.title
        }
    }

    pub fn rating_display(&self) -> String {
        match self.rating {
            Some(rating) => format!("{}", rating),
            None => "N/A".to_string(),
        }
    }
}

/// Confirmed selections arrive from clients either as plain title strings or
/// as full records. Normalized into `BookingSelection` at the boundary.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum SelectionInput {
    Title(String),
    Structured(BookingSelection),
}

impl SelectionInput {
    pub fn into_selection(self) -> BookingSelection {
        match self {
            SelectionInput::Title(title) => BookingSelection::titled(title),
            SelectionInput::Structured(selection) => selection,
        }
    }
}
