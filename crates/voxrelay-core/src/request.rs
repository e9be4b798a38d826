//! Inbound synthesis request model

use crate::error::{Error, Result};

/// Voice used when the caller omits the `voice` parameter.
pub const DEFAULT_VOICE: &str = "alloy";

/// Vibe used when the caller omits the `vibe` parameter.
pub const DEFAULT_VIBE: &str = "null";

/// Fixed style description sent with every upstream request. The upstream
/// API reads this as natural-language direction for tone, pacing and
/// emotion; callers cannot override it.
pub const STYLE_PROMPT: &str = "\
Voice Affect: Energetic and animated; dynamic with variations in pitch and tone.

Tone: Excited and enthusiastic, conveying an upbeat and thrilling atmosphere.

Pacing: Rapid delivery when describing the game or the key moments (e.g., \"an overtime thriller,\" \"pull off an unbelievable win\") to convey the intensity and build excitement.

Slightly slower during dramatic pauses to let key points sink in.

Emotion: Intensely focused, and excited. Giving off positive energy.

Personality: Relatable and engaging.

Pauses: Short, purposeful pauses after key moments in the game.";

/// A validated request for one audio generation.
///
/// Lives for a single relay hop; nothing is retained across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub prompt: String,
    pub voice: String,
    pub vibe: String,
}

impl SynthesisRequest {
    /// Build a request with default voice and vibe. Rejects an empty or
    /// whitespace-only prompt before any upstream call is attempted.
    pub fn new(prompt: impl Into<String>) -> Result<Self> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(Error::EmptyPrompt);
        }
        Ok(Self {
            prompt,
            voice: DEFAULT_VOICE.to_string(),
            vibe: DEFAULT_VIBE.to_string(),
        })
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_vibe(mut self, vibe: impl Into<String>) -> Self {
        self.vibe = vibe.into();
        self
    }

    /// Form fields for the upstream POST. The upstream contract names the
    /// spoken text `input` and the style direction `prompt`.
    pub fn form_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("input", self.prompt.as_str()),
            ("prompt", STYLE_PROMPT),
            ("voice", self.voice.as_str()),
            ("vibe", self.vibe.as_str()),
        ]
    }
}
