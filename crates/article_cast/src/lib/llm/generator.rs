use std::{fmt::Debug, future::Future};

use serde::Deserialize;

/// Produces a narration script from article text.
///
/// One call per run: no streaming, no multi-turn exchange, no retry. The
/// implementation owns the instruction template; callers hand over the
/// article text only.
pub trait ScriptGenerator {
    const GENERATION_MODEL: &'static str;

    type Error: Debug;

    fn generate_script(
        &self,
        article: &str,
    ) -> impl Future<Output = Result<ScriptResponse, Self::Error>> + Send;
}

/// Narration returned by the generation model. `text` is used verbatim as
/// the podcast script; no length, language, or safety checks are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptResponse {
    pub text: String,
}
