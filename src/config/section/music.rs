//! `[music]` configuration.
//!
//! The ordered track list rendered on the Music page.

use crate::config::ConfigDiagnostics;
use crate::embed::widget::WidgetProvider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    /// Track identifiers, rendered in this order.
    pub tracks: Vec<String>,
    /// Embed provider for the tracks.
    pub provider: WidgetProvider,
    /// Player accent color.
    pub color: String,
    /// Paragraph shown above the players.
    pub intro: String,
}

crate::config_fields!(MusicConfig => MusicFields, "music" { tracks, provider, color, intro });

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            provider: WidgetProvider::default(),
            color: "#ff5500".into(),
            intro: String::new(),
        }
    }
}

impl MusicConfig {
    pub const TEMPLATE: &'static str = r##"[music]
tracks = []                 # Track ids, rendered in this order
provider = "soundcloud"
color = "#ff5500"           # Player accent color
intro = ""
"##;

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.tracks.iter().any(|id| id.trim().is_empty()) {
            diag.warn(Self::FIELDS.tracks, "contains an empty track id");
        }
    }
}
