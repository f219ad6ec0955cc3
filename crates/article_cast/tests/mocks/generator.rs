use std::sync::{Arc, Mutex};

use article_cast::{ScriptGenerator, ScriptResponse};

#[derive(Clone)]
pub struct MockGenerator {
    pub response_text: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(response_text: &str) -> Self {
        Self {
            response_text: response_text.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response_text: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl ScriptGenerator for MockGenerator {
    const GENERATION_MODEL: &'static str = "mock-gemini";
    type Error = anyhow::Error;

    async fn generate_script(&self, article: &str) -> Result<ScriptResponse, Self::Error> {
        self.calls.lock().unwrap().push(article.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(ScriptResponse {
            text: self.response_text.clone(),
        })
    }
}
