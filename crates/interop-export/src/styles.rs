use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and table cells.
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Document title size in points.
    pub heading1_size: usize,

    /// Part heading size in points.
    pub heading2_size: usize,

    /// Section heading size in points.
    pub heading3_size: usize,

    /// Size of `> ` caption lines in points.
    pub caption_size: usize,

    /// Table cell text size in points.
    pub table_size: usize,

    /// Primary accent (hex RGB, no `#`): titles, part headings, table headers.
    pub accent_color: String,

    /// Secondary accent: section headings and alternate table headers.
    pub secondary_color: String,

    /// Caption text color.
    pub caption_color: String,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,
}

impl DocumentStyles {
    /// Resolve a table accent name from the markup to a hex color.
    ///
    /// `primary` and `secondary` map to the configured accents; anything
    /// else is taken as a literal hex color.
    pub fn accent(&self, name: &str) -> String {
        match name {
            "primary" => self.accent_color.clone(),
            "secondary" => self.secondary_color.clone(),
            other => other.trim_start_matches('#').to_string(),
        }
    }

    /// Page margin in twentieths of a point.
    pub fn margin_twips(&self) -> i32 {
        (self.margin_inches * 1440.0).round() as i32
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            heading_font: "Helvetica".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 14,
            heading3_size: 12,
            caption_size: 9,
            table_size: 10,
            accent_color: "0B3D91".to_string(),
            secondary_color: "8B0000".to_string(),
            caption_color: "808080".to_string(),
            margin_inches: 0.7,
        }
    }
}
