//! Info-popup content shown when hovering a marker.

use crate::data::point::GeoPoint;
use serde::{Deserialize, Serialize};

/// Structured popup payload handed to the host engine.
///
/// The engine decides how to render it (HTML, native widget, ...); the core
/// only prepares the fields and the truncated summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupContent {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl PopupContent {
    /// Builds the popup payload for a point, truncating the summary to
    /// `preview_chars` characters.
    pub fn for_point(point: &GeoPoint, preview_chars: usize) -> Self {
        Self {
            title: point.title.clone(),
            author: point.author.clone(),
            category: point.category.clone(),
            summary: point
                .summary
                .as_deref()
                .map(|summary| truncate_summary(summary, preview_chars)),
        }
    }

    /// Structured JSON form for engines that accept document content.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "author": self.author,
            "category": self.category,
            "summary": self.summary,
        })
    }
}

/// Truncates a summary to at most `max_chars` characters, appending an
/// ellipsis. Cuts on a `char` boundary, never inside a code point.
pub fn truncate_summary(summary: &str, max_chars: usize) -> String {
    if summary.chars().count() <= max_chars {
        summary.to_string()
    } else {
        let mut truncated: String = summary.chars().take(max_chars).collect();
        truncated.push('…');
        truncated
    }
}
