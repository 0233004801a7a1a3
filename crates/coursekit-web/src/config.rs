use serde::{Deserialize, Serialize};

use coursekit_export::notes::ShortAnswerPrompt;

use crate::error::WebError;

/// Current config version. Bump this when adding fields or changing shape.
const CURRENT_VERSION: u32 = 1;

/// Element id of the optional `<script type="application/json">` block a
/// host page uses to override [`PageConfig`] defaults.
pub const CONFIG_ELEMENT_ID: &str = "coursekit-config";

/// Per-page settings. Every field is optional in the JSON block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// `tracing` filter directive, e.g. `"debug"` or `"coursekit_storage=debug"`.
    pub log_level: String,
    pub short_answer: ShortAnswerConfig,
    /// Delay before the "added to your word bank" alert, so the button
    /// repaints first.
    pub confirm_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortAnswerConfig {
    /// Id of the textarea holding the learner's free-text answer.
    pub input_id: String,
    pub label: String,
    pub prompt: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            log_level: "info".to_string(),
            short_answer: ShortAnswerConfig::default(),
            confirm_delay_ms: 100,
        }
    }
}

impl Default for ShortAnswerConfig {
    fn default() -> Self {
        Self {
            input_id: "short-answer-q5".to_string(),
            label: "Q5".to_string(),
            prompt: "Why does the passage emphasize that being organized is not about achieving perfection?"
                .to_string(),
        }
    }
}

impl ShortAnswerConfig {
    pub fn to_prompt(&self) -> ShortAnswerPrompt {
        ShortAnswerPrompt {
            label: self.label.clone(),
            prompt: self.prompt.clone(),
        }
    }
}

impl PageConfig {
    /// Parse a page's config block. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, WebError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        // Check the version on the raw value before deserializing the shape.
        let json: serde_json::Value = serde_json::from_str(raw)?;
        let version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if version > u64::from(CURRENT_VERSION) {
            return Err(WebError::Config(format!(
                "config_version {version} is newer than this build supports ({CURRENT_VERSION})"
            )));
        }

        let mut config: PageConfig = serde_json::from_value(json)?;
        config.config_version = CURRENT_VERSION;
        Ok(config)
    }
}
