pub mod elevenlabs;

use std::{fmt::Debug, future::Future};

use serde::Serialize;

/// Voice identity used for narration unless a run overrides it.
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

pub trait SpeechSynthesizer {
    const SYNTHESIS_MODEL: &'static str;

    type Error: Debug;

    fn synthesize(
        &self,
        request: SpeechRequest,
    ) -> impl Future<Output = Result<AudioArtifact, Self::Error>> + Send;
}

/// One text-to-speech invocation: the narration text plus the voice
/// identity and shaping parameters it is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    pub voice_settings: VoiceSettings,
}

/// Voice-shaping parameters sent with every synthesis request. Constant per
/// run; there is no per-request tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        VoiceSettings {
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}

/// Raw audio returned by the synthesis stage, untouched beyond trusting the
/// declared MIME type. Terminal output of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}
