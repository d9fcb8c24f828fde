use serde::{Deserialize, Serialize};

/// Host-provided color palette, as hex strings the way Telegram hands its
/// `themeParams` over. Every field defaults individually, so a partial
/// palette still parses and a missing one falls back wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    #[serde(rename = "bg_color", default = "default_background")]
    pub background: String,
    #[serde(rename = "text_color", default = "default_text")]
    pub text: String,
    #[serde(rename = "hint_color", default = "default_hint")]
    pub hint: String,
    #[serde(rename = "button_color", default = "default_button")]
    pub button: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            background: default_background(),
            text: default_text(),
            hint: default_hint(),
            button: default_button(),
        }
    }
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_text() -> String {
    "#000000".to_string()
}

fn default_hint() -> String {
    "#999999".to_string()
}

fn default_button() -> String {
    "#2481cc".to_string()
}
