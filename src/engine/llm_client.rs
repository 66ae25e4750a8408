use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::engine::protocol::{EngineError, NarrationEngine};

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Blocking client for an OpenAI-compatible chat completions endpoint.
/// Ollama serves this surface at /v1, so the default config talks to a
/// local `llama3:latest`.
pub struct OllamaClient {
    http: Client,
    config: BackendConfig,
}

impl OllamaClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.endpoint)
    }

    /// Startup reachability check. Failure here is reported as a notice and
    /// the session starts anyway; turns fail softly until the backend is up.
    pub fn probe(&self) -> anyhow::Result<String> {
        let resp: serde_json::Value = self
            .http
            .get(format!("{}/v1/models", self.config.endpoint))
            .send()?
            .json()?;

        Ok(format!(
            "Connected ({} models available)",
            resp["data"].as_array().map(|a| a.len()).unwrap_or(0)
        ))
    }
}

impl NarrationEngine for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String, EngineError> {
        let req = ChatCompletionRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            messages: vec![ChatMessage {
                role: "system".into(),
                content: prompt.to_string(),
            }],
        };

        debug!("requesting narration, prompt is {} bytes", prompt.len());

        let resp = self
            .http
            .post(self.completions_url())
            .json(&req)
            .send()
            .map_err(|e| EngineError::Unavailable(e.to_string()))?
            .json::<ChatCompletionResponse>()
            .map_err(|e| EngineError::Malformed(e.to_string()))?;

        extract_narration(resp)
    }
}

/// Pull the narration text out of a decoded response, rejecting responses
/// with no choices or a blank completion.
fn extract_narration(resp: ChatCompletionResponse) -> Result<String, EngineError> {
    let choice = resp.choices.into_iter().next().ok_or(EngineError::Empty)?;
    let text = choice.message.content.trim().to_string();
    if text.is_empty() {
        return Err(EngineError::Empty);
    }
    Ok(text)
}
